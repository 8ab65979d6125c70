//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Labeled text lines with a fixed label width.
//! - Standardized missing value handling.
//! - Certificate truncation.
//! - Raw body re-indentation and writing to stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use compose_client::ClientError;
use compose_config::constants::{CA_CERTIFICATE_PREVIEW_CHARS, FIELD_LABEL_WIDTH};
use std::io::Write;

/// String representation for missing or empty values in text output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// The value itself, or `N/A` when it is empty.
pub fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        DEFAULT_MISSING_VALUE
    } else {
        value
    }
}

/// Format an optional timestamp as RFC 3339, or `N/A`.
pub fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Append one `label: value` line with the label right-aligned.
pub fn push_field(output: &mut String, label: &str, value: impl std::fmt::Display) {
    output.push_str(&format!(
        "{:>width$}: {}\n",
        label,
        value,
        width = FIELD_LABEL_WIDTH
    ));
}

/// Shorten a base64 CA certificate for display unless `full` is set.
///
/// Certificates no longer than the preview length are returned unchanged.
pub fn truncate_certificate(cert: &str, full: bool) -> String {
    if full || cert.chars().count() <= CA_CERTIFICATE_PREVIEW_CHARS {
        return cert.to_string();
    }
    let preview: String = cert.chars().take(CA_CERTIFICATE_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Re-indent a raw JSON body, keeping key order.
///
/// # Errors
/// Returns `ClientError::InvalidResponse` when the body is not JSON.
pub fn format_raw(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Response body is not JSON: {}", e)))?;
    let mut output = serde_json::to_string_pretty(&value)?;
    output.push('\n');
    Ok(output)
}

/// Write formatted output to stdout.
pub fn output_result(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write output")
}
