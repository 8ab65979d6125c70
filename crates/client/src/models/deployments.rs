//! Deployment models.
//!
//! Responsibilities:
//! - Decode deployments as returned by `GET deployments` and `POST deployments`.
//! - Describe the parameters accepted by `POST deployments` and validate them locally.
//!
//! Invariants:
//! - A deployment body may carry an `errors` member instead of (or next to) the
//!   deployment fields; `Deployment::error_message` exposes it.
//! - Unset optional creation parameters are omitted from the request body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ApiErrors, Link};
use crate::error::{ClientError, Result};

/// Connection strings of a deployment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionStrings {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub health: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub ssh: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub admin: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub ssh_admin: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub cli: Vec<String>,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub direct: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentLinks {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub compose_web_ui: Link,
}

/// A Compose deployment.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(
        deserialize_with = "crate::serde_helpers::lenient_api_errors",
        skip_serializing_if = "ApiErrors::is_empty"
    )]
    pub errors: ApiErrors,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(
        rename = "type",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub deployment_type: String,
    #[serde(deserialize_with = "crate::serde_helpers::lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub provision_recipe_id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub ca_certificate_base64: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub connection_strings: ConnectionStrings,
    #[serde(
        rename = "_links",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub links: DeploymentLinks,
}

impl Deployment {
    /// Server-reported error text, if the body carried one.
    pub fn error_message(&self) -> Option<String> {
        self.errors.message()
    }

    /// Link to the deployment in the Compose web UI, template fragments removed.
    pub fn web_ui_link(&self) -> String {
        self.links.compose_web_ui.resolved_href()
    }
}

/// Deployments envelope contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DeploymentsEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub deployments: Vec<Deployment>,
}

/// Deployment list response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DeploymentListResponse {
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: DeploymentsEmbedded,
}

/// Body of `POST deployments`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDeploymentParams {
    pub name: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    #[serde(rename = "type")]
    pub database_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wired_tiger: Option<bool>,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl CreateDeploymentParams {
    /// Create parameters for a deployment of `database_type` named `name`.
    pub fn new(name: impl Into<String>, database_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database_type: database_type.into(),
            ..Default::default()
        }
    }

    /// Check the parameters locally.
    ///
    /// The account id is filled in by the caller from `get_account` and is
    /// not checked here.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidRequest` when the name or type is empty,
    /// when neither a cluster nor a datacenter is given, or when `units` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "Deployment name must not be empty".to_string(),
            ));
        }
        if self.database_type.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "Deployment type must not be empty".to_string(),
            ));
        }
        if is_blank(self.cluster_id.as_deref()) && is_blank(self.datacenter.as_deref()) {
            return Err(ClientError::InvalidRequest(
                "Must supply either a --cluster id or --datacenter region".to_string(),
            ));
        }
        if self.units == Some(0) {
            return Err(ClientError::InvalidRequest(
                "Units must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
