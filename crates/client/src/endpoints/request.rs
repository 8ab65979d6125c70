//! Request helpers shared by all endpoints.
//!
//! Responsibilities:
//! - Build endpoint URLs from the normalized base URL.
//! - Attach the bearer token and JSON `Accept` header.
//! - Map non-success statuses to `ClientError::ApiError`, using the API's
//!   `errors` payload for the message when the body carries one.
//!
//! Does NOT handle:
//! - Retries or rate limiting. Every call sends exactly one request.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrors;

/// Join the base URL (without trailing slash) and a relative resource path.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

/// Attach the headers every Compose request carries.
pub(crate) fn authorized(builder: RequestBuilder, auth_token: &str) -> RequestBuilder {
    builder
        .header(AUTHORIZATION, format!("Bearer {}", auth_token))
        .header(ACCEPT, "application/json")
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, deserialize_with = "crate::serde_helpers::lenient_api_errors")]
    errors: ApiErrors,
}

/// Extract the API's error text from a response body, if it has one.
pub(crate) fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.errors.message())
}

/// Error text for a failed response: the API's `errors` payload, else the
/// trimmed body, else the status reason phrase.
pub(crate) fn failure_message(status: StatusCode, body: &str) -> String {
    if let Some(message) = api_error_message(body) {
        return message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Send a request and fail on non-success statuses.
///
/// # Errors
///
/// Returns `ClientError::HttpError` on transport failure and
/// `ClientError::ApiError` when the server answers with a non-2xx status.
pub(crate) async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(method, endpoint, status = status.as_u16(), "Compose API response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message: failure_message(status, &body),
    })
}

/// GET a resource path and return the response body unchanged.
pub async fn get_json(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    path: &str,
) -> Result<String> {
    let url = endpoint_url(base_url, path);
    debug!(%url, "GET");

    let builder = authorized(client.get(&url), auth_token);
    let response = send_request(builder, path, "GET").await?;
    Ok(response.text().await?)
}

/// Decode a JSON body into `T`, naming `what` in the error.
pub fn parse_json<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}
