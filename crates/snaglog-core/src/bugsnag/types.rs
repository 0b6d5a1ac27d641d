// SPDX-License-Identifier: Apache-2.0

//! Bugsnag API payload types.
//!
//! Only the fields Snaglog reads are modelled; unknown keys are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A Bugsnag organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Opaque organization id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

impl Organization {
    /// Label shown in the organization picker.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.slug)
    }
}

/// A project within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque project id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Number of open errors.
    #[serde(default)]
    pub open_error_count: u64,
}

/// Fields Bugsnag used to group an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingFields {
    /// Error class used for grouping.
    #[serde(rename = "errorClass", default)]
    pub error_class: Option<String>,
    /// Source file of the top in-project frame.
    #[serde(default)]
    pub file: Option<String>,
    /// Code line used for grouping.
    #[serde(default)]
    pub code: Option<String>,
}

/// A grouped error record from the errors endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEvent {
    /// Exception class.
    #[serde(default)]
    pub error_class: Option<String>,
    /// Exception message.
    #[serde(default)]
    pub message: Option<String>,
    /// Context (route, controller, ...) the error occurred in.
    #[serde(default)]
    pub context: Option<String>,
    /// When the error was first seen, as sent by the API.
    #[serde(default, deserialize_with = "string_or_none")]
    pub first_seen: Option<String>,
    /// Grouping fields, absent on some payloads.
    #[serde(default)]
    pub grouping_fields: Option<GroupingFields>,
}

/// Keeps string values; any other JSON value decodes as `None`.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => Some(raw),
        _ => None,
    })
}

impl ErrorEvent {
    /// Grouped file, if Bugsnag reported one.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.grouping_fields
            .as_ref()
            .and_then(|g| g.file.as_deref())
    }
}
