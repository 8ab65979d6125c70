//! Placement and catalog API methods for [`ComposeClient`].
//!
//! # What this module handles:
//! - Listing clusters, datacenters and deployable database types
//!
//! # What this module does NOT handle:
//! - Choosing a placement for a new deployment (the caller passes
//!   `cluster_id` or `datacenter` in `CreateDeploymentParams`)

use crate::client::ComposeClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Cluster, Database, Datacenter};

impl ComposeClient {
    /// List clusters.
    pub async fn list_clusters(&self) -> Result<Vec<Cluster>> {
        endpoints::list_clusters(&self.http, &self.base_url, self.token()).await
    }

    /// List datacenters.
    pub async fn list_datacenters(&self) -> Result<Vec<Datacenter>> {
        endpoints::list_datacenters(&self.http, &self.base_url, self.token()).await
    }

    /// List database types and their versions.
    pub async fn list_databases(&self) -> Result<Vec<Database>> {
        endpoints::list_databases(&self.http, &self.base_url, self.token()).await
    }
}
