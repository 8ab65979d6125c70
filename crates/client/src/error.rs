//! Error types for the Compose client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Compose client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client could not be configured for authentication.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the Compose API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request parameters rejected locally, before any HTTP call.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The API accepted the request but reported a semantic error.
    #[error("Deployment rejected: {0}")]
    DeploymentRejected(String),
}

impl ClientError {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || self.status() == Some(401)
    }

    /// Check if this error was raised before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::InvalidUrl(_) | Self::InvalidRequest(_)
        )
    }
}
