//! Main Compose REST API client and API methods.
//!
//! This module provides the primary [`ComposeClient`] for interacting with the
//! Compose API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `accounts`: Account lookup
//! - `deployments`: Deployment listing and creation
//! - `recipes`: Recipe lookup
//! - `catalog`: Clusters, datacenters and the database catalog
//! - `users`: Current user
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading the token from the environment (handled by `compose-config`)
//!
//! # Invariants
//! - Every method sends exactly one request, except `create_deployment` with
//!   invalid parameters, which sends none.
//! - The client holds no global state; several clients may coexist.

pub mod builder;

mod accounts;
mod catalog;
mod deployments;
mod recipes;
mod users;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::endpoints::{self, Resource};
use crate::error::Result;

/// Compose REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use compose_client::ComposeClient;
/// use secrecy::SecretString;
///
/// let client = ComposeClient::builder()
///     .api_token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// let account = client.get_account().await?;
/// ```
#[derive(Debug)]
pub struct ComposeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
}

impl ComposeClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ComposeClientBuilder {
        builder::ComposeClientBuilder::new()
    }

    /// Get the normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        self.api_token.expose_secret()
    }

    /// Fetch a resource and return the response body unmodified.
    pub async fn get_raw(&self, resource: &Resource) -> Result<String> {
        endpoints::get_json(&self.http, &self.base_url, self.token(), &resource.path()).await
    }

    /// Fetch a resource and deserialize the body into `T`.
    pub async fn get_typed<T: DeserializeOwned>(&self, resource: &Resource) -> Result<T> {
        let body = self.get_raw(resource).await?;
        endpoints::parse_json(&body, &resource.path())
    }
}
