//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON of the decoded records.
//!
//! Does NOT handle:
//! - Raw mode (see `common::format_raw`).

use anyhow::Result;
use compose_client::{Account, Cluster, Database, Datacenter, Deployment, Recipe, User};
use serde::Serialize;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

impl Formatter for JsonFormatter {
    fn format_account(&self, account: &Account) -> Result<String> {
        to_pretty(account)
    }

    fn format_deployments(&self, deployments: &[Deployment]) -> Result<String> {
        to_pretty(deployments)
    }

    fn format_deployment(&self, deployment: &Deployment) -> Result<String> {
        // Certificates are never truncated in JSON output
        to_pretty(deployment)
    }

    fn format_recipe(&self, recipe: &Recipe) -> Result<String> {
        to_pretty(recipe)
    }

    fn format_recipes(&self, recipes: &[Recipe]) -> Result<String> {
        to_pretty(recipes)
    }

    fn format_clusters(&self, clusters: &[Cluster]) -> Result<String> {
        to_pretty(clusters)
    }

    fn format_datacenters(&self, datacenters: &[Datacenter]) -> Result<String> {
        to_pretty(datacenters)
    }

    fn format_databases(&self, databases: &[Database]) -> Result<String> {
        to_pretty(databases)
    }

    fn format_user(&self, user: &User) -> Result<String> {
        to_pretty(user)
    }
}
