//! Account models.

use serde::{Deserialize, Serialize};

/// Compose account associated with the API token.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
}

/// Accounts envelope contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AccountsEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub accounts: Vec<Account>,
}

/// Account list response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AccountListResponse {
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: AccountsEmbedded,
}
