//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{API_TOKEN_ENV, BASE_URL_ENV, TIMEOUT_ENV};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(token) = env_var_or_none(API_TOKEN_ENV) {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(url) = env_var_or_none(BASE_URL_ENV) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(TIMEOUT_ENV) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: TIMEOUT_ENV.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
