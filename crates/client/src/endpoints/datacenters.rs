//! Datacenter endpoints.

use reqwest::Client;

use super::request::{get_json, parse_json};
use super::resource::Resource;
use crate::error::Result;
use crate::models::{Datacenter, DatacenterListResponse};

/// List the datacenters deployments can be placed in.
pub async fn list_datacenters(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Vec<Datacenter>> {
    let body = get_json(client, base_url, auth_token, &Resource::Datacenters.path()).await?;
    let resp: DatacenterListResponse = parse_json(&body, "datacenters")?;
    Ok(resp.embedded.datacenters)
}
