//! Shared HAL types used across Compose resources.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// URI template fragment the API leaves unresolved in link hrefs.
pub const EMBED_TEMPLATE: &str = "{?embed}";

/// JSON+HAL hypermedia link.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub templated: bool,
}

impl Link {
    /// The href with every `{?embed}` template fragment removed.
    pub fn resolved_href(&self) -> String {
        self.href.replace(EMBED_TEMPLATE, "")
    }
}

/// Error payload reported by the API inside an otherwise well-formed body.
///
/// The API uses `{"errors": {"error": "..."}}` for general failures and
/// `{"errors": {"field": ["..."]}}` for per-field validation failures.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrors {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl ApiErrors {
    pub(crate) fn from_message(message: String) -> Self {
        Self {
            error: Some(message),
            fields: BTreeMap::new(),
        }
    }

    /// True when no error text is present.
    pub fn is_empty(&self) -> bool {
        self.message().is_none()
    }

    /// Combined, human-readable error text, or `None` when nothing was reported.
    pub fn message(&self) -> Option<String> {
        let mut parts = Vec::new();

        if let Some(error) = self.error.as_deref().map(str::trim)
            && !error.is_empty()
        {
            parts.push(error.to_string());
        }

        for (field, value) in &self.fields {
            let detail = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
                other => other.to_string(),
            };
            if !detail.is_empty() {
                parts.push(format!("{field}: {detail}"));
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
