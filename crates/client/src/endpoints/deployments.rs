//! Deployment endpoints.
//!
//! Responsibilities:
//! - List deployments.
//! - Create a deployment from validated parameters.
//!
//! Invariants:
//! - `create_deployment` never sends a request for parameters that fail
//!   `CreateDeploymentParams::validate` or lack an account id.
//! - A creation response carrying an `errors` payload is returned as a
//!   `Deployment` with `error_message()` set, whatever its status code.

use reqwest::Client;
use tracing::debug;

use super::request::{
    api_error_message, authorized, endpoint_url, failure_message, get_json, parse_json,
};
use super::resource::Resource;
use crate::error::{ClientError, Result};
use crate::models::{CreateDeploymentParams, Deployment, DeploymentListResponse};

/// List all deployments.
pub async fn list_deployments(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Vec<Deployment>> {
    let body = get_json(client, base_url, auth_token, &Resource::Deployments.path()).await?;
    let resp: DeploymentListResponse = parse_json(&body, "deployments")?;
    Ok(resp.embedded.deployments)
}

/// Create a deployment.
///
/// # Errors
///
/// Returns `ClientError::InvalidRequest` before any request when the
/// parameters are invalid, `ClientError::ApiError` for a non-2xx status
/// without an error payload, and `ClientError::InvalidResponse` when a
/// successful body cannot be decoded.
pub async fn create_deployment(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &CreateDeploymentParams,
) -> Result<Deployment> {
    params.validate()?;
    if params.account_id.trim().is_empty() {
        return Err(ClientError::InvalidRequest(
            "Deployment account id must not be empty".to_string(),
        ));
    }

    let path = Resource::Deployments.path();
    let url = endpoint_url(base_url, &path);
    debug!(%url, name = %params.name, "POST");

    let response = authorized(client.post(&url), auth_token)
        .json(params)
        .send()
        .await?;
    let status = response.status();
    let response_url = response.url().to_string();
    debug!(endpoint = %path, status = status.as_u16(), "Compose API response");
    let body = response.text().await?;

    if !status.is_success() {
        if api_error_message(&body).is_some() {
            return parse_json(&body, "deployment");
        }
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url: response_url,
            message: failure_message(status, &body),
        });
    }

    parse_json(&body, "deployment")
}
