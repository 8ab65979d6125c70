//! Deployment API methods for [`ComposeClient`].

use crate::client::ComposeClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateDeploymentParams, Deployment};

impl ComposeClient {
    /// List all deployments.
    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        endpoints::list_deployments(&self.http, &self.base_url, self.token()).await
    }

    /// Create a deployment.
    ///
    /// Parameters are validated before any request is sent. A server-side
    /// rejection comes back as `Ok` with [`Deployment::error_message`] set.
    pub async fn create_deployment(&self, params: &CreateDeploymentParams) -> Result<Deployment> {
        endpoints::create_deployment(&self.http, &self.base_url, self.token(), params).await
    }
}
