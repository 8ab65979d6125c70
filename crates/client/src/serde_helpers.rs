//! Serde helpers for best-effort decoding of Compose responses.
//!
//! Responsibilities:
//! - Turn `null` into the field's default so a single null never fails a record.
//! - Parse RFC 3339 timestamps leniently (unparseable values become `None`).
//! - Accept the several shapes the API uses for its `errors` member.
//!
//! Invariants / assumptions:
//! - Absent fields are covered by `#[serde(default)]` on the models; these helpers
//!   only deal with present-but-awkward values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::models::ApiErrors;

/// Deserialize a value, mapping JSON `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional RFC 3339 timestamp, discarding values that do not parse.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

/// Text form of an arbitrary JSON value: strings as-is, lists joined with `"; "`.
fn value_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

/// Deserialize an optional message given as a string, a list, or any other JSON value.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<serde_json::Value>::deserialize(deserializer)?.and_then(value_text))
}

/// Deserialize an `errors` member of any shape.
///
/// Objects keep their `error` text and per-field entries; any other value
/// becomes the general error message.
pub fn lenient_api_errors<'de, D>(deserializer: D) -> Result<ApiErrors, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Object(mut map)) => ApiErrors {
            error: map.remove("error").and_then(value_text),
            fields: map.into_iter().collect(),
        },
        Some(other) => value_text(other)
            .map(ApiErrors::from_message)
            .unwrap_or_default(),
        None => ApiErrors::default(),
    })
}
