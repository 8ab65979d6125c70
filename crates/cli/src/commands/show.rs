//! `show` command implementation.
//!
//! Responsibilities:
//! - Fetch one resource kind and print it raw, as JSON, or as labeled text.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Exactly one request is sent per invocation.
//! - In raw mode no typed decoding happens; the body is only re-indented.

use anyhow::Result;
use clap::Subcommand;
use compose_client::Resource;
use compose_config::Config;
use tracing::info;

use crate::commands::build_client;
use crate::formatters::{FormatOptions, OutputFormat, format_raw, get_formatter, output_result};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShowCommand {
    /// Show the account associated with the API token
    Account,
    /// List deployments
    Deployments,
    /// Show a recipe
    Recipe {
        /// Recipe ID
        recipe_id: String,
    },
    /// List the recipes of a deployment
    Recipes {
        /// Deployment ID
        deployment_id: String,
    },
    /// List clusters
    Clusters,
    /// List datacenters
    Datacenters,
    /// List database types and their versions
    Databases,
    /// Show the user the API token belongs to
    User,
}

impl ShowCommand {
    /// The API resource this command reads.
    pub fn resource(&self) -> Resource {
        match self {
            Self::Account => Resource::Account,
            Self::Deployments => Resource::Deployments,
            Self::Recipe { recipe_id } => Resource::Recipe(recipe_id.clone()),
            Self::Recipes { deployment_id } => Resource::RecipesForDeployment(deployment_id.clone()),
            Self::Clusters => Resource::Clusters,
            Self::Datacenters => Resource::Datacenters,
            Self::Databases => Resource::Databases,
            Self::User => Resource::User,
        }
    }
}

/// Run the show command.
pub async fn run(
    config: &Config,
    command: ShowCommand,
    raw: bool,
    format: OutputFormat,
    options: FormatOptions,
) -> Result<()> {
    let resource = command.resource();
    info!(resource = %resource, raw, "Showing resource");

    let client = build_client(config)?;

    if raw {
        let body = client.get_raw(&resource).await?;
        return output_result(&format_raw(&body)?);
    }

    let formatter = get_formatter(format, options);
    let output = match command {
        ShowCommand::Account => formatter.format_account(&client.get_account().await?)?,
        ShowCommand::Deployments => {
            formatter.format_deployments(&client.list_deployments().await?)?
        }
        ShowCommand::Recipe { recipe_id } => {
            formatter.format_recipe(&client.get_recipe(&recipe_id).await?)?
        }
        ShowCommand::Recipes { deployment_id } => formatter
            .format_recipes(&client.list_recipes_for_deployment(&deployment_id).await?)?,
        ShowCommand::Clusters => formatter.format_clusters(&client.list_clusters().await?)?,
        ShowCommand::Datacenters => {
            formatter.format_datacenters(&client.list_datacenters().await?)?
        }
        ShowCommand::Databases => formatter.format_databases(&client.list_databases().await?)?,
        ShowCommand::User => formatter.format_user(&client.get_user().await?)?,
    };

    output_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_command_resources() {
        assert_eq!(ShowCommand::Account.resource(), Resource::Account);
        assert_eq!(
            ShowCommand::Recipe {
                recipe_id: "r1".to_string()
            }
            .resource()
            .path(),
            "recipes/r1"
        );
        assert_eq!(
            ShowCommand::Recipes {
                deployment_id: "d1".to_string()
            }
            .resource()
            .path(),
            "deployments/d1/recipes"
        );
        assert_eq!(ShowCommand::Databases.resource().path(), "databases");
    }
}
