//! Database catalog endpoints.

use reqwest::Client;

use super::request::{get_json, parse_json};
use super::resource::Resource;
use crate::error::Result;
use crate::models::{Database, DatabaseListResponse};

/// List the database types (and their versions) that can be deployed.
pub async fn list_databases(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Vec<Database>> {
    let body = get_json(client, base_url, auth_token, &Resource::Databases.path()).await?;
    let resp: DatabaseListResponse = parse_json(&body, "databases")?;
    Ok(resp.embedded.applications)
}
