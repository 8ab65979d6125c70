//! Configuration types for the Compose CLI.
//!
//! Responsibilities:
//! - Define connection settings (base URL, request timeout).
//! - Define the main `Config` structure combining connection and token.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API token is held as a `SecretString` and never appears in `Debug` output.
//! - A `Config` only exists once a token has been resolved.

use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the Compose API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Versioned base URL (e.g., https://api.compose.io/2016-07/)
    pub base_url: String,
    /// HTTP request timeout
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    /// Bearer token sent with every request.
    pub api_token: SecretString,
}
