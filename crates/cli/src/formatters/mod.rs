//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON and labeled-text output formats.
//! - Implement the `Formatter` trait for every Compose resource type.
//! - Re-indent raw response bodies.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Text | Human message | `No deployments found.` |
//!
//! ## Missing/Null Value Handling
//!
//! JSON carries the decoded defaults unchanged. Text output prints `N/A` for
//! empty strings and missing timestamps (`common::DEFAULT_MISSING_VALUE`).

use anyhow::Result;
use compose_client::{Account, Cluster, Database, Datacenter, Deployment, Recipe, User};

mod common;
mod json;
mod text;

pub use common::{format_raw, output_result};
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    /// `--fmt` selects text; JSON is the default.
    pub fn from_flags(fmt: bool) -> Self {
        if fmt { Self::Text } else { Self::Json }
    }
}

/// Options that change how records are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Print CA certificates in full in text output.
    pub full_ca: bool,
}

/// Trait for formatting output in different formats.
pub trait Formatter {
    /// Format the account.
    fn format_account(&self, account: &Account) -> Result<String>;

    /// Format a deployment list.
    fn format_deployments(&self, deployments: &[Deployment]) -> Result<String>;

    /// Format a single deployment with certificate and connection details.
    fn format_deployment(&self, deployment: &Deployment) -> Result<String>;

    /// Format a recipe.
    fn format_recipe(&self, recipe: &Recipe) -> Result<String>;

    /// Format a recipe list.
    fn format_recipes(&self, recipes: &[Recipe]) -> Result<String>;

    /// Format a cluster list.
    fn format_clusters(&self, clusters: &[Cluster]) -> Result<String>;

    /// Format a datacenter list.
    fn format_datacenters(&self, datacenters: &[Datacenter]) -> Result<String>;

    /// Format the database catalog.
    fn format_databases(&self, databases: &[Database]) -> Result<String>;

    /// Format the current user.
    fn format_user(&self, user: &User) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat, options: FormatOptions) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter::new(options)),
    }
}
