//! Cluster models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Compose cluster a deployment can be placed on.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub account_slug: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(
        rename = "type",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub cluster_type: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub provider: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub multitenant: bool,
    #[serde(deserialize_with = "crate::serde_helpers::lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub subdomain: String,
}

/// Clusters envelope contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ClustersEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub clusters: Vec<Cluster>,
}

/// Cluster list response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ClusterListResponse {
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: ClustersEmbedded,
}
