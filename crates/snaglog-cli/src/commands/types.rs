// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.

use std::path::PathBuf;

use serde::Serialize;
use snaglog_core::{LogRecord, Organization, Preview, Project};

/// Filters and preselections for one download run.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Error status filter.
    pub status: String,
    /// Day window.
    pub days: u32,
    /// Organization id, slug or name given on the command line.
    pub org: Option<String>,
    /// Project name or slug given on the command line.
    pub project: Option<String>,
}

/// Result from the download command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DownloadResult {
    /// Selected organization.
    pub organization: Organization,
    /// Resolved project.
    pub project: Project,
    /// Status filter that was applied.
    pub status: String,
    /// Day window that was applied.
    pub days: u32,
    /// Log file the records were written to.
    pub log_path: PathBuf,
    /// Every logged record in fetch order.
    pub records: Vec<LogRecord>,
    /// Preview table contents.
    #[serde(skip)]
    pub preview: Preview,
}
