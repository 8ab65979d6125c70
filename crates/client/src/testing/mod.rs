//! Testing utilities for Compose client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use compose_client::testing::load_fixture;
//!
//! let fixture = load_fixture("deployments/list_deployments.json");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a fixture file from the fixtures directory as text.
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture_str(fixture_path_rel: &str) -> String {
    let full_path = fixture_path(fixture_path_rel);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "accounts/list_accounts.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    serde_json::from_str(&load_fixture_str(fixture_path)).expect("Invalid JSON in fixture")
}
