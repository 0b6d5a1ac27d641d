// SPDX-License-Identifier: Apache-2.0

//! Error normalization, log forwarding and preview rows.
//!
//! Every fetched error becomes one [`LogRecord`] handed to a [`LogSink`]
//! exactly once. The preview only shows the first [`MAX_ERRORS_PREVIEW`]
//! records and never affects what is logged.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::bugsnag::{ErrorEvent, GroupingFields};
use crate::utils::{format_relative_time, limit, parse_timestamp};

/// Maximum number of errors shown in the preview table.
pub const MAX_ERRORS_PREVIEW: usize = 10;

/// Characters of an error message kept in the preview table before `...`.
pub const MESSAGE_LIMIT: usize = 50;

/// Tracing target the Bugsnag records are emitted on.
pub const LOG_TARGET: &str = "bugsnag";

const UNKNOWN: &str = "Unknown";
const NO_MESSAGE: &str = "No message";

/// Normalized error ready to be logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Error class, `"Unknown"` when absent.
    pub error_class: String,
    /// Full message, `"No message"` when absent.
    pub message: String,
    /// Request or job context.
    pub context: Option<String>,
    /// When the error was first seen, exactly as Bugsnag sent it.
    pub first_seen: Option<String>,
    /// Grouping fields with every key present.
    pub grouping_fields: GroupingFields,
}

impl LogRecord {
    /// Builds the record for one fetched error.
    #[must_use]
    pub fn from_event(event: &ErrorEvent) -> Self {
        Self {
            error_class: event
                .error_class
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            message: event
                .message
                .clone()
                .unwrap_or_else(|| NO_MESSAGE.to_string()),
            context: event.context.clone(),
            first_seen: event.first_seen.clone(),
            grouping_fields: event.grouping_fields.clone().unwrap_or_default(),
        }
    }

    /// Log line headline.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("Bugsnag Error: {}", self.error_class)
    }
}

/// Destination for normalized error records.
pub trait LogSink {
    /// Writes one record.
    fn record(&mut self, record: &LogRecord);
}

/// Sink emitting each record as an error event on the `bugsnag` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&mut self, record: &LogRecord) {
        let grouping = &record.grouping_fields;
        error!(
            target: LOG_TARGET,
            error_class = %record.error_class,
            error_message = %record.message,
            context = record.context.as_deref(),
            first_seen = record.first_seen.as_deref(),
            grouping_error_class = grouping.error_class.as_deref(),
            grouping_file = grouping.file.as_deref(),
            grouping_code = grouping.code.as_deref(),
            "{}",
            record.headline()
        );
    }
}

/// Normalizes every event and forwards it to `sink`.
///
/// Returns the records in fetch order.
pub fn forward_all(events: &[ErrorEvent], sink: &mut dyn LogSink) -> Vec<LogRecord> {
    events
        .iter()
        .map(|event| {
            let record = LogRecord::from_event(event);
            sink.record(&record);
            record
        })
        .collect()
}

/// One row of the preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    /// Error class.
    pub error_class: String,
    /// Message limited to [`MESSAGE_LIMIT`] characters plus `...`.
    pub message: String,
    /// Relative first-seen time, `"Unknown"` when absent or unreadable.
    pub first_seen: String,
    /// Grouped file or `"Unknown"`.
    pub file: String,
}

/// Preview of a download: the shown rows and how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Rows shown, at most [`MAX_ERRORS_PREVIEW`].
    pub rows: Vec<PreviewRow>,
    /// Records not shown.
    pub remaining: usize,
}

/// Builds the preview relative to `now`.
#[must_use]
pub fn preview(records: &[LogRecord], now: &DateTime<Utc>) -> Preview {
    let rows = records
        .iter()
        .take(MAX_ERRORS_PREVIEW)
        .map(|record| PreviewRow {
            error_class: record.error_class.clone(),
            message: limit(&record.message, MESSAGE_LIMIT),
            first_seen: record
                .first_seen
                .as_deref()
                .and_then(parse_timestamp)
                .map_or_else(|| UNKNOWN.to_string(), |t| format_relative_time(&t, now)),
            file: record
                .grouping_fields
                .file
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        })
        .collect();

    Preview {
        rows,
        remaining: records.len().saturating_sub(MAX_ERRORS_PREVIEW),
    }
}
