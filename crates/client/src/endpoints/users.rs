//! Current-user endpoint.

use reqwest::Client;

use super::request::{get_json, parse_json};
use super::resource::Resource;
use crate::error::Result;
use crate::models::User;

/// Get the user the token belongs to.
pub async fn get_user(client: &Client, base_url: &str, auth_token: &str) -> Result<User> {
    let body = get_json(client, base_url, auth_token, &Resource::User.path()).await?;
    parse_json(&body, "user")
}
