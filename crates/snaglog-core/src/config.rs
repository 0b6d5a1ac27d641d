// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Snaglog.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `SNAGLOG_`)
//! 2. Config file: `~/.config/snaglog/config.toml`
//! 3. Built-in defaults
//!
//! The Bugsnag token additionally falls back to `BUGSNAG_API_TOKEN`.
//!
//! # Examples
//!
//! ```bash
//! # Provide the token via environment variable
//! SNAGLOG_BUGSNAG__TOKEN=your_personal_auth_token snaglog
//!
//! # Or the conventional variable name
//! BUGSNAG_API_TOKEN=your_personal_auth_token snaglog --days 14
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

use crate::error::SnaglogError;

/// Environment variable consulted when no token is set in the config layers.
pub const TOKEN_ENV_VAR: &str = "BUGSNAG_API_TOKEN";

/// Bugsnag API base URL.
pub const BUGSNAG_API_BASE_URL: &str = "https://api.bugsnag.com";

/// Default log file name inside the log directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "bugsnag.log";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Bugsnag API settings.
    pub bugsnag: BugsnagConfig,
    /// Default download filters.
    pub download: DownloadConfig,
    /// Log sink settings.
    pub log: LogConfig,
}

/// Bugsnag API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BugsnagConfig {
    /// Personal auth token.
    pub token: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for BugsnagConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: BUGSNAG_API_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Default filters for the errors query.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Day window for `filters[event.since]`.
    pub days: u32,
    /// Error status for `filters[error.status]`.
    pub status: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            days: 7,
            status: "open".to_string(),
        }
    }
}

/// Log sink settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory holding the log file. Defaults to the data directory.
    pub dir: Option<PathBuf>,
    /// Log file name.
    pub file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_LOG_FILE_NAME.to_string(),
        }
    }
}

impl LogConfig {
    /// Directory the log file is written to.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(data_dir)
    }

    /// Full path of the log file.
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir().join(&self.file_name)
    }
}

impl AppConfig {
    /// Resolves the Bugsnag token.
    ///
    /// Uses `bugsnag.token` from the config layers first, then
    /// [`TOKEN_ENV_VAR`]. Empty values count as missing.
    pub fn token(&self) -> Result<SecretString, SnaglogError> {
        if let Some(token) = &self.bugsnag.token
            && !token.trim().is_empty()
        {
            return Ok(SecretString::from(token.trim().to_string()));
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.trim().is_empty()
        {
            return Ok(SecretString::from(token.trim().to_string()));
        }

        Err(SnaglogError::MissingToken)
    }
}

fn home_or_current() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the Snaglog configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/snaglog`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("snaglog");
    }
    home_or_current().join(".config").join("snaglog")
}

/// Returns the Snaglog data directory.
///
/// Respects the `XDG_DATA_HOME` environment variable if set,
/// otherwise defaults to `~/.local/share/snaglog`.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME")
        && !xdg_data.is_empty()
    {
        return PathBuf::from(xdg_data).join("snaglog");
    }
    home_or_current()
        .join(".local")
        .join("share")
        .join("snaglog")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default config file.
///
/// Environment variables use the prefix `SNAGLOG_` and double underscore
/// for nested keys (e.g., `SNAGLOG_BUGSNAG__TOKEN`).
///
/// # Errors
///
/// Returns `SnaglogError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, SnaglogError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from an explicit config file path.
///
/// The file is optional; a missing file yields defaults plus environment.
pub fn load_config_from(path: &Path) -> Result<AppConfig, SnaglogError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SNAGLOG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(key: &str, value: Option<&str>, f: F) {
        let original = std::env::var(key).ok();
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        f();

        unsafe {
            match original {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.toml")).unwrap();

        assert_eq!(config.bugsnag.base_url, "https://api.bugsnag.com");
        assert_eq!(config.bugsnag.timeout_seconds, 30);
        assert_eq!(config.download.days, 7);
        assert_eq!(config.download.status, "open");
        assert_eq!(config.log.file_name, "bugsnag.log");
    }

    #[test]
    #[serial]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[bugsnag]
token = "abc123"
timeout_seconds = 5

[download]
days = 14
status = "resolved"

[log]
dir = "/var/log/app"
file_name = "errors.log"
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.bugsnag.token.as_deref(), Some("abc123"));
        assert_eq!(config.bugsnag.timeout_seconds, 5);
        assert_eq!(config.download.days, 14);
        assert_eq!(config.download.status, "resolved");
        assert_eq!(
            config.log.log_file_path(),
            PathBuf::from("/var/log/app/errors.log")
        );
    }

    #[test]
    #[serial]
    fn test_invalid_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[download]\ndays = \"many\"\n").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(SnaglogError::Config { .. })));
    }

    #[test]
    #[serial]
    fn test_env_overrides_nested_key() {
        let dir = tempfile::tempdir().unwrap();
        with_env("SNAGLOG_DOWNLOAD__DAYS", Some("30"), || {
            let config = load_config_from(&dir.path().join("missing.toml")).unwrap();
            assert_eq!(config.download.days, 30);
        });
    }

    #[test]
    #[serial]
    fn test_token_prefers_config_value() {
        let mut config = AppConfig::default();
        config.bugsnag.token = Some("from-config".to_string());
        with_env(TOKEN_ENV_VAR, Some("from-env"), || {
            let token = config.token().unwrap();
            assert_eq!(token.expose_secret(), "from-config");
        });
    }

    #[test]
    #[serial]
    fn test_token_falls_back_to_env() {
        let config = AppConfig::default();
        with_env(TOKEN_ENV_VAR, Some("from-env"), || {
            let token = config.token().unwrap();
            assert_eq!(token.expose_secret(), "from-env");
        });
    }

    #[test]
    #[serial]
    fn test_missing_token() {
        let mut config = AppConfig::default();
        config.bugsnag.token = Some("   ".to_string());
        with_env(TOKEN_ENV_VAR, None, || {
            assert!(matches!(config.token(), Err(SnaglogError::MissingToken)));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg_config_home() {
        with_env("XDG_CONFIG_HOME", Some("/custom/config"), || {
            assert_eq!(config_dir(), PathBuf::from("/custom/config/snaglog"));
        });
    }

    #[test]
    #[serial]
    fn test_data_dir_ignores_empty_xdg_data_home() {
        with_env("XDG_DATA_HOME", Some(""), || {
            assert!(data_dir().ends_with("snaglog"));
        });
    }

    #[test]
    #[serial]
    fn test_default_log_file_in_data_dir() {
        with_env("XDG_DATA_HOME", Some("/custom/data"), || {
            let log = LogConfig::default();
            assert_eq!(
                log.log_file_path(),
                PathBuf::from("/custom/data/snaglog/bugsnag.log")
            );
        });
    }
}
