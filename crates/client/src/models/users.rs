//! Current-user model.

use serde::{Deserialize, Serialize};

/// The user the API token belongs to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub id: String,
}
