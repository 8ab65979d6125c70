//! Datacenter models.

use serde::{Deserialize, Serialize};

/// A region/provider pair deployments can be placed in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datacenter {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub provider: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub slug: String,
}

/// Datacenters envelope contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DatacentersEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub datacenters: Vec<Datacenter>,
}

/// Datacenter list response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DatacenterListResponse {
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: DatacentersEmbedded,
}
