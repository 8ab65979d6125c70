//! Data models for Compose API responses.
//!
//! Every model decodes best-effort: absent fields fall back to their defaults
//! and list envelopes without the expected `_embedded` key yield empty lists.

pub mod accounts;
pub mod clusters;
pub mod common;
pub mod databases;
pub mod datacenters;
pub mod deployments;
pub mod recipes;
pub mod users;

pub use accounts::{Account, AccountListResponse, AccountsEmbedded};
pub use clusters::{Cluster, ClusterListResponse, ClustersEmbedded};
pub use common::{ApiErrors, EMBED_TEMPLATE, Link};
pub use databases::{
    Database, DatabaseListResponse, DatabasesEmbedded, Version, VersionsEmbedded,
};
pub use datacenters::{Datacenter, DatacenterListResponse, DatacentersEmbedded};
pub use deployments::{
    ConnectionStrings, CreateDeploymentParams, Deployment, DeploymentLinks, DeploymentListResponse,
    DeploymentsEmbedded,
};
pub use recipes::{Recipe, RecipesEmbedded, RecipesResponse};
pub use users::User;
