//! Compose REST API client.
//!
//! This crate provides a type-safe client for the hosted Compose API
//! (`2016-07`). Every resource can be fetched either as the raw response
//! body or as a typed record unwrapped from its HAL envelope.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::ComposeClient;
pub use client::builder::ComposeClientBuilder;
pub use endpoints::Resource;
pub use error::{ClientError, Result};
pub use models::{
    Account, ApiErrors, Cluster, ConnectionStrings, CreateDeploymentParams, Database, Datacenter,
    Deployment, Link, Recipe, User, Version,
};
