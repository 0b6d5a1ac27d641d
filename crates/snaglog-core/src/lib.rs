// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Snaglog Core
//!
//! Core library for Snaglog - download recent Bugsnag errors into a local log.
//!
//! This crate provides reusable components for:
//! - Bugsnag Data Access API integration (organizations, projects, errors)
//! - Organization and project selection
//! - Error normalization and log forwarding
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snaglog_core::{BugsnagApi, BugsnagClient, ErrorQuery, TracingSink, forward_all, load_config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = load_config()?;
//! let client = BugsnagClient::from_config(config.token()?, &config.bugsnag)?;
//!
//! let query = ErrorQuery::builder().status("open").days(7).build();
//! let errors = client.list_errors("515fb9337c1074f6fd000003", &query).await?;
//!
//! let records = forward_all(&errors, &mut TracingSink);
//! println!("Logged {} errors", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`bugsnag`] - HTTP client and payload types
//! - [`config`] - Configuration loading and paths
//! - [`download`] - Log records, sinks and previews
//! - [`error`] - Error types
//! - [`select`] - Organization and project selection
//! - [`utils`] - Text helpers

// ============================================================================
// Error Handling
// ============================================================================

pub use error::SnaglogError;

/// Convenience Result type for Snaglog operations.
///
/// This is equivalent to `std::result::Result<T, SnaglogError>`.
pub type Result<T> = std::result::Result<T, SnaglogError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, BugsnagConfig, DownloadConfig, LogConfig, config_dir, config_file_path, data_dir,
    load_config, load_config_from,
};

// ============================================================================
// Bugsnag API
// ============================================================================

pub use bugsnag::{
    BugsnagApi, BugsnagClient, ErrorEvent, ErrorQuery, GroupingFields, Organization, Project,
};

// ============================================================================
// Selection
// ============================================================================

pub use select::{Prompter, choose_organization, find_organization, find_project, resolve_project};

// ============================================================================
// Download
// ============================================================================

pub use download::{
    LogRecord, LogSink, MAX_ERRORS_PREVIEW, Preview, PreviewRow, TracingSink, forward_all, preview,
};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{format_relative_time, limit, parse_timestamp, truncate, truncate_with_suffix};

// ============================================================================
// Modules
// ============================================================================

pub mod bugsnag;
pub mod config;
pub mod download;
pub mod error;
pub mod select;
pub mod utils;
