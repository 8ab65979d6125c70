//! Centralized constants for the Compose CLI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the Compose API bearer token.
pub const API_TOKEN_ENV: &str = "COMPOSEAPITOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "COMPOSE_API_BASE_URL";

/// Environment variable overriding the request timeout (seconds).
pub const TIMEOUT_ENV: &str = "COMPOSE_TIMEOUT";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Versioned base path of the hosted Compose API.
pub const DEFAULT_BASE_URL: &str = "https://api.compose.io/2016-07/";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Display Defaults
// =============================================================================

/// Width of the right-aligned field label in formatted output.
pub const FIELD_LABEL_WIDTH: usize = 15;

/// Number of CA certificate characters shown before truncation.
pub const CA_CERTIFICATE_PREVIEW_CHARS: usize = 32;
