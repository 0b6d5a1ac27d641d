// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `SnaglogError` and appends a tip for the
//! failures an operator can fix themselves.

use std::fmt::Write;

use anyhow::Error;
use snaglog_core::error::SnaglogError;

/// Maximum characters of an API response body echoed back.
const BODY_PREVIEW_LIMIT: usize = 500;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `SnaglogError`, returns the error chain.
pub fn format_error(error: &Error) -> String {
    let Some(snag_err) = error.downcast_ref::<SnaglogError>() else {
        return format!("{error:#}");
    };

    match snag_err {
        SnaglogError::MissingToken => format!(
            "{snag_err}\n\nTip: Add to your environment: BUGSNAG_API_TOKEN=your_personal_auth_token\n     or set `token` under [bugsnag] in {}",
            snaglog_core::config_file_path().display()
        ),
        SnaglogError::Config { .. } => format!(
            "{snag_err}\n\nTip: Check your config file at {}",
            snaglog_core::config_file_path().display()
        ),
        SnaglogError::Api { status, body, .. } => {
            let mut msg = snag_err.to_string();
            let body = body.trim();
            if !body.is_empty() {
                let _ = write!(
                    msg,
                    "\n{}",
                    snaglog_core::truncate(body, BODY_PREVIEW_LIMIT)
                );
            }
            if snag_err.is_unauthorized() {
                msg.push_str(
                    "\n\nTip: Bugsnag rejected the token. Check BUGSNAG_API_TOKEN holds a valid personal auth token.",
                );
            } else if *status >= 500 {
                msg.push_str("\n\nTip: Bugsnag may be having issues. Try again in a moment.");
            }
            msg
        }
        SnaglogError::Network(_) => {
            format!("{snag_err}\n\nTip: Check your internet connection and try again.")
        }
        SnaglogError::InvalidResponse { source, .. } => format!(
            "{snag_err}: {source}\n\nTip: Check that bugsnag.base_url points at the Bugsnag Data Access API."
        ),
        SnaglogError::ProjectNotFound { .. } => {
            format!("{snag_err}\n\nTip: Use one of the names or slugs shown in the table above.")
        }
        SnaglogError::OrganizationNotFound { .. } => format!(
            "{snag_err}\n\nTip: Pass an organization id, slug or name from the table above."
        ),
        SnaglogError::NoOrganizations => format!(
            "{snag_err}\n\nTip: Make sure the token's user belongs to at least one organization."
        ),
        SnaglogError::NoProjects => {
            format!("{snag_err}\n\nTip: Choose an organization that has projects.")
        }
        SnaglogError::Prompt { .. } => format!(
            "{snag_err}\n\nTip: Run in a terminal, or pass --org and --project to skip the prompts."
        ),
    }
}
