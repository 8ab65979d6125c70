//! Addressable API resources.

use std::fmt;

use super::url_encoding::encode_path_segment;

/// A GET-able Compose resource, addressed relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Accounts visible to the token (`accounts`).
    Account,
    /// All deployments (`deployments`).
    Deployments,
    /// A single recipe (`recipes/{id}`).
    Recipe(String),
    /// Recipes run against a deployment (`deployments/{id}/recipes`).
    RecipesForDeployment(String),
    /// Clusters (`clusters`).
    Clusters,
    /// Datacenters (`datacenters`).
    Datacenters,
    /// Database catalog (`databases`).
    Databases,
    /// The current user (`user`).
    User,
}

impl Resource {
    /// Path relative to the API base, with ids percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Account => "accounts".to_string(),
            Self::Deployments => "deployments".to_string(),
            Self::Recipe(id) => format!("recipes/{}", encode_path_segment(id)),
            Self::RecipesForDeployment(id) => {
                format!("deployments/{}/recipes", encode_path_segment(id))
            }
            Self::Clusters => "clusters".to_string(),
            Self::Datacenters => "datacenters".to_string(),
            Self::Databases => "databases".to_string(),
            Self::User => "user".to_string(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
