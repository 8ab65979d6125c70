//! CLI command implementations.

pub mod create;
pub mod show;

use anyhow::Result;
use compose_client::ComposeClient;
use compose_config::Config;

/// Build an API client from loaded configuration.
pub fn build_client(config: &Config) -> Result<ComposeClient> {
    Ok(ComposeClient::builder().from_config(config).build()?)
}
