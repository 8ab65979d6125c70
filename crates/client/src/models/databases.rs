//! Database catalog models.

use serde::{Deserialize, Serialize};

/// One available version of a database type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub application: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub preferred: bool,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub version: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionsEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub versions: Vec<Version>,
}

/// A database type that can be deployed, with its versions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    #[serde(
        rename = "type",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub database_type: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub status: String,
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: VersionsEmbedded,
}

impl Database {
    pub fn versions(&self) -> &[Version] {
        &self.embedded.versions
    }
}

/// Databases envelope contents. The API names the collection `applications`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DatabasesEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub applications: Vec<Database>,
}

/// Database catalog response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseListResponse {
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: DatabasesEmbedded,
}
