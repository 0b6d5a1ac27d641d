// SPDX-License-Identifier: Apache-2.0

//! Bugsnag Data Access API client.
//!
//! Three read-only endpoints are used: the organizations of the token's user,
//! the projects of one organization, and the grouped errors of one project.
//! Every request is a single attempt; failures surface to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::BugsnagConfig;
use crate::error::SnaglogError;

pub mod types;

pub use types::{ErrorEvent, GroupingFields, Organization, Project};

/// Number of errors requested per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// API version header value required by the organizations endpoint.
const ORGANIZATIONS_API_VERSION: &str = "2";

/// Characters escaped when an id is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Filters for the project errors query.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ErrorQuery {
    /// Error status (`open`, `resolved`, `ignored`, ...).
    #[builder(into, default = String::from("open"))]
    pub status: String,
    /// Only errors with events in the last `days` days.
    #[builder(default = 7)]
    pub days: u32,
}

impl ErrorQuery {
    /// Query string pairs sent to `/projects/{id}/errors`.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("filters[error.status]", self.status.clone()),
            ("filters[event.since]", format!("{}d", self.days)),
            ("per_page", DEFAULT_PER_PAGE.to_string()),
            ("sort", "last_seen".to_string()),
            ("direction", "desc".to_string()),
        ]
    }
}

/// Read operations against the Bugsnag API.
#[async_trait]
pub trait BugsnagApi: Send + Sync {
    /// Lists the organizations visible to the token.
    async fn list_organizations(&self) -> crate::Result<Vec<Organization>>;

    /// Lists the projects of an organization.
    async fn list_projects(&self, organization_id: &str) -> crate::Result<Vec<Project>>;

    /// Lists the grouped errors of a project.
    async fn list_errors(
        &self,
        project_id: &str,
        query: &ErrorQuery,
    ) -> crate::Result<Vec<ErrorEvent>>;
}

/// HTTP client for the Bugsnag Data Access API.
#[derive(Debug)]
pub struct BugsnagClient {
    /// HTTP client with configured timeout.
    http: Client,
    /// Personal auth token.
    token: SecretString,
    /// API base URL without trailing slash.
    base_url: String,
}

impl BugsnagClient {
    /// Creates a client with an explicit token, base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns `SnaglogError::Network` if the HTTP client cannot be built.
    pub fn new(token: SecretString, base_url: &str, timeout: Duration) -> crate::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the `[bugsnag]` configuration section.
    pub fn from_config(token: SecretString, config: &BugsnagConfig) -> crate::Result<Self> {
        Self::new(
            token,
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the default request headers.
    ///
    /// Invalid header values (a token with control characters) are skipped,
    /// which the API then answers with 401.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(val) = HeaderValue::from_str(&format!("token {}", self.token.expose_secret())) {
            headers.insert(AUTHORIZATION, val);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Issues one authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        extra_headers: HeaderMap,
    ) -> crate::Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(%url, "Sending Bugsnag API request");

        let response = self
            .http
            .get(&url)
            .headers(self.build_headers())
            .headers(extra_headers)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Bugsnag API request failed");
            return Err(SnaglogError::Api {
                status: status.as_u16(),
                body,
                endpoint: endpoint.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|source| SnaglogError::InvalidResponse {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

/// Encodes an opaque id for use as a single URL path segment.
fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

#[async_trait]
impl BugsnagApi for BugsnagClient {
    #[instrument(skip(self))]
    async fn list_organizations(&self) -> crate::Result<Vec<Organization>> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-version",
            HeaderValue::from_static(ORGANIZATIONS_API_VERSION),
        );
        let organizations: Vec<Organization> =
            self.get_json("/user/organizations", &[], headers).await?;
        debug!(count = organizations.len(), "Fetched organizations");
        Ok(organizations)
    }

    #[instrument(skip(self))]
    async fn list_projects(&self, organization_id: &str) -> crate::Result<Vec<Project>> {
        let endpoint = format!("/organizations/{}/projects", path_segment(organization_id));
        let projects: Vec<Project> = self.get_json(&endpoint, &[], HeaderMap::new()).await?;
        debug!(count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    #[instrument(skip(self))]
    async fn list_errors(
        &self,
        project_id: &str,
        query: &ErrorQuery,
    ) -> crate::Result<Vec<ErrorEvent>> {
        let endpoint = format!("/projects/{}/errors", path_segment(project_id));
        let errors: Vec<ErrorEvent> = self
            .get_json(&endpoint, &query.params(), HeaderMap::new())
            .await?;
        debug!(count = errors.len(), "Fetched errors");
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_query_defaults() {
        let query = ErrorQuery::builder().build();
        assert_eq!(query.status, "open");
        assert_eq!(query.days, 7);
    }

    #[test]
    fn error_query_params() {
        let query = ErrorQuery::builder().status("resolved").days(30).build();
        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("filters[error.status]", "resolved".to_string()),
                ("filters[event.since]", "30d".to_string()),
                ("per_page", "100".to_string()),
                ("sort", "last_seen".to_string()),
                ("direction", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn path_segment_escapes_separators() {
        assert_eq!(path_segment("515fb9337c1074f6fd000001"), "515fb9337c1074f6fd000001");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = BugsnagClient::new(
            SecretString::from("token"),
            "https://api.bugsnag.com/",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://api.bugsnag.com");
    }

    #[test]
    fn headers_carry_token_and_content_type() {
        let client = BugsnagClient::new(
            SecretString::from("secret-token"),
            "https://api.bugsnag.com",
            Duration::from_secs(5),
        )
        .unwrap();
        let headers = client.build_headers();
        assert_eq!(headers[AUTHORIZATION], "token secret-token");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(!headers.contains_key("x-version"));
    }
}
