//! Cluster endpoints.

use reqwest::Client;

use super::request::{get_json, parse_json};
use super::resource::Resource;
use crate::error::Result;
use crate::models::{Cluster, ClusterListResponse};

/// List the clusters available to the account.
pub async fn list_clusters(client: &Client, base_url: &str, auth_token: &str) -> Result<Vec<Cluster>> {
    let body = get_json(client, base_url, auth_token, &Resource::Clusters.path()).await?;
    let resp: ClusterListResponse = parse_json(&body, "clusters")?;
    Ok(resp.embedded.clusters)
}
