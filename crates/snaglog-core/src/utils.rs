// SPDX-License-Identifier: Apache-2.0

//! Text utility functions for Snaglog.
//!
//! Provides truncation, timestamp parsing and relative time display for the
//! preview tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Truncates text to a maximum length with a custom suffix.
///
/// Uses character count (not byte count) to safely handle multi-byte UTF-8.
/// The suffix is included in the max length calculation.
///
/// # Examples
///
/// ```
/// use snaglog_core::utils::truncate_with_suffix;
///
/// let text = "This is a very long string that needs truncation";
/// let result = truncate_with_suffix(text, 20, "... [more]");
/// assert!(result.ends_with("... [more]"));
/// assert!(result.chars().count() <= 20);
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        text.to_string()
    } else {
        let suffix_len = suffix.chars().count();
        let truncate_at = max_len.saturating_sub(suffix_len);
        let truncated: String = text.chars().take(truncate_at).collect();
        format!("{truncated}{suffix}")
    }
}

/// Truncates text to a maximum length with default ellipsis suffix "...".
///
/// # Examples
///
/// ```
/// use snaglog_core::utils::truncate;
///
/// assert_eq!(truncate("Hello", 10), "Hello");
///
/// let long = "Undefined index: user_id in app/Http/Controllers/ProfileController.php";
/// let result = truncate(long, 50);
/// assert!(result.ends_with("..."));
/// assert_eq!(result.chars().count(), 50);
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Limits text to `max_len` characters of content, then appends "...".
///
/// Trailing whitespace of the kept part is dropped before the ellipsis, so
/// the result holds at most `max_len + 3` characters. Text within the limit
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use snaglog_core::utils::limit;
///
/// assert_eq!(limit("Short", 50), "Short");
/// assert_eq!(limit("Undefined index: user_id", 10), "Undefined...");
/// ```
#[must_use]
pub fn limit(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len).collect();
    format!("{}...", kept.trim_end())
}

/// Parses a timestamp as Bugsnag or a proxy may send it.
///
/// Accepts RFC 3339 and zone-less `YYYY-MM-DD[ T]HH:MM:SS[.fff]` (read as
/// UTC) or a bare `YYYY-MM-DD`. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Formats `dt` relative to `now` (e.g., "3 days ago").
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use snaglog_core::utils::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(&now, &now), "just now");
///
/// let yesterday = now - Duration::days(1);
/// assert_eq!(format_relative_time(&yesterday, &now), "1 day ago");
/// ```
#[must_use]
pub fn format_relative_time(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);
    let future = duration.num_seconds() < 0;
    let duration = duration.abs();

    let days = duration.num_days();
    let amount = if days >= 365 {
        plural(days / 365, "year")
    } else if days >= 30 {
        plural(days / 30, "month")
    } else if days >= 7 {
        plural(days / 7, "week")
    } else if days > 0 {
        plural(days, "day")
    } else if duration.num_hours() > 0 {
        plural(duration.num_hours(), "hour")
    } else if duration.num_minutes() > 0 {
        plural(duration.num_minutes(), "minute")
    } else if duration.num_seconds() >= 10 {
        plural(duration.num_seconds(), "second")
    } else {
        return "just now".to_string();
    };

    if future {
        format!("{amount} from now")
    } else {
        format!("{amount} ago")
    }
}
