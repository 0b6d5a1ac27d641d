// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Snaglog CLI.
//!
//! Two layers share one `tracing` registry:
//!
//! - the Bugsnag log file, receiving only error events on the `bugsnag`
//!   target as JSON lines, appended and never rotated;
//! - stderr diagnostics, controlled by `RUST_LOG`.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only on stderr
//! snaglog
//!
//! # Debug output for troubleshooting
//! RUST_LOG=snaglog=debug,snaglog_core=debug snaglog
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use snaglog_core::LogConfig;
use snaglog_core::download::LOG_TARGET;
use tracing::{Level, Metadata};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{Targets, filter_fn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "snaglog=warn,snaglog_core=warn,reqwest=error";
const VERBOSE_FILTER: &str = "snaglog=debug,snaglog_core=debug,reqwest=warn";

/// Opens the append-only Bugsnag log file, creating its directory.
pub fn open_log_file(dir: &Path, file_name: &str) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

/// Initialize the logging subsystem.
///
/// Returns the path of the Bugsnag log file.
pub fn init_logging(config: &LogConfig, verbose: bool) -> Result<PathBuf> {
    let dir = config.log_dir();
    let appender = open_log_file(&dir, &config.file_name)?;

    let file_layer = fmt::layer()
        .json()
        .with_writer(appender)
        .with_target(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_filter(Targets::new().with_target(LOG_TARGET, Level::ERROR));

    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Invalid log filter directives")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter)
        .with_filter(filter_fn(|meta: &Metadata<'_>| meta.target() != LOG_TARGET));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(config.log_file_path())
}
