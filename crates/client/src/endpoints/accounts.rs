//! Account endpoints.

use reqwest::Client;

use super::request::{get_json, parse_json};
use super::resource::Resource;
use crate::error::{ClientError, Result};
use crate::models::{Account, AccountListResponse};

/// Get the account associated with the token.
///
/// The API lists accounts; the first one in response order is returned.
///
/// # Errors
///
/// Returns `ClientError::NotFound` when the list is empty.
pub async fn get_account(client: &Client, base_url: &str, auth_token: &str) -> Result<Account> {
    let body = get_json(client, base_url, auth_token, &Resource::Account.path()).await?;
    let resp: AccountListResponse = parse_json(&body, "accounts")?;

    resp.embedded
        .accounts
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::NotFound("No accounts returned for this token".to_string()))
}
