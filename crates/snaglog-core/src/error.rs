// SPDX-License-Identifier: Apache-2.0

//! Error types for Snaglog.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Snaglog operations.
#[derive(Error, Debug)]
pub enum SnaglogError {
    /// No Bugsnag personal auth token is configured.
    #[error("BUGSNAG_API_TOKEN not configured")]
    MissingToken,

    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Bugsnag answered with a non-2xx status.
    #[error("API request failed: {status} ({endpoint})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
        /// Endpoint path that was requested.
        endpoint: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("Invalid response from {endpoint}")]
    InvalidResponse {
        /// Endpoint path that was requested.
        endpoint: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The token can see no organizations.
    #[error("No organizations found.")]
    NoOrganizations,

    /// The chosen organization has no projects.
    #[error("No projects found.")]
    NoProjects,

    /// A preselected organization did not match any listed organization.
    #[error("Organization '{input}' not found.")]
    OrganizationNotFound {
        /// Value supplied by the operator.
        input: String,
    },

    /// Typed project name or slug did not match any listed project.
    #[error("Project '{input}' not found.")]
    ProjectNotFound {
        /// Value supplied by the operator.
        input: String,
    },

    /// Interactive prompt failed (no terminal, interrupted, ...).
    #[error("Prompt failed: {message}")]
    Prompt {
        /// Error message.
        message: String,
    },
}

impl SnaglogError {
    /// Returns true for authentication failures reported by the API.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SnaglogError::Api { status: 401 | 403, .. })
    }
}

impl From<config::ConfigError> for SnaglogError {
    fn from(err: config::ConfigError) -> Self {
        SnaglogError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = SnaglogError::Api {
            status: 404,
            body: "not found".to_string(),
            endpoint: "/user/organizations".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed: 404 (/user/organizations)"
        );
    }

    #[test]
    fn unauthorized_detection() {
        let unauthorized = SnaglogError::Api {
            status: 401,
            body: String::new(),
            endpoint: "/user/organizations".to_string(),
        };
        let server_error = SnaglogError::Api {
            status: 500,
            body: String::new(),
            endpoint: "/user/organizations".to_string(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!server_error.is_unauthorized());
        assert!(!SnaglogError::NoProjects.is_unauthorized());
    }

    #[test]
    fn project_not_found_names_input() {
        let err = SnaglogError::ProjectNotFound {
            input: "my-app".to_string(),
        };
        assert_eq!(err.to_string(), "Project 'my-app' not found.");
    }
}
