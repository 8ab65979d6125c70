//! Client builder for constructing [`ComposeClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, user agent)
//!
//! # Invariants
//! - `api_token` is required; `base_url` defaults to the public Compose API.
//! - The base URL is always normalized to have no trailing slashes.

use std::time::Duration;

use compose_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
};
use secrecy::SecretString;

use crate::client::ComposeClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`ComposeClient`].
pub struct ComposeClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for ComposeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ComposeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.compose.io/2016-07/`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_token = Some(config.api_token.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.compose.io/2016-07/"` -> `"https://api.compose.io/2016-07"`
    /// - `"http://localhost:8080//"` -> `"http://localhost:8080"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`ComposeClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if no token was provided,
    /// [`ClientError::InvalidUrl`] if the base URL is empty, and
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ComposeClient> {
        let api_token = self
            .api_token
            .ok_or_else(|| ClientError::AuthFailed("api_token is required".to_string()))?;

        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("cocli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ComposeClient {
            http,
            base_url,
            api_token,
        })
    }
}
