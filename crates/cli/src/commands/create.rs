//! `create` command implementation.
//!
//! Responsibilities:
//! - Create a deployment in the token's account.
//!
//! Does NOT handle:
//! - Provisioning decisions; parameters are forwarded to the API unchanged.
//!
//! Invariants:
//! - Raw mode and a missing `--cluster`/`--datacenter` are rejected before any request.
//! - A server-reported rejection is an error, never printed as a deployment.

use anyhow::Result;
use clap::{Args, Subcommand};
use compose_client::{ClientError, CreateDeploymentParams};
use compose_config::Config;
use tracing::info;

use crate::commands::build_client;
use crate::error::UsageError;
use crate::formatters::{FormatOptions, OutputFormat, get_formatter, output_result};

#[derive(Subcommand, Debug, Clone)]
pub enum CreateCommand {
    /// Create a new deployment
    Deployment(CreateDeploymentArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateDeploymentArgs {
    /// Name of the new deployment
    pub name: String,

    /// Database type (e.g., mongodb, postgresql, redis)
    #[arg(value_name = "TYPE")]
    pub database_type: String,

    /// Cluster ID to deploy into
    #[arg(long, value_name = "ID")]
    pub cluster: Option<String>,

    /// Datacenter region to deploy into (e.g., aws:us-east-1)
    #[arg(long, value_name = "REGION")]
    pub datacenter: Option<String>,

    /// Database version to deploy
    #[arg(long = "version", value_name = "VERSION")]
    pub db_version: Option<String>,

    /// Initial number of resource units
    #[arg(long)]
    pub units: Option<u32>,

    /// Enable SSL
    #[arg(long)]
    pub ssl: bool,

    /// Use the WiredTiger storage engine (MongoDB only)
    #[arg(long)]
    pub wired_tiger: bool,
}

impl CreateDeploymentArgs {
    /// Request parameters for these arguments; the account id is left empty.
    pub fn to_params(&self) -> CreateDeploymentParams {
        CreateDeploymentParams {
            name: self.name.clone(),
            account_id: String::new(),
            cluster_id: non_blank(&self.cluster),
            datacenter: non_blank(&self.datacenter),
            database_type: self.database_type.clone(),
            version: non_blank(&self.db_version),
            units: self.units,
            ssl: self.ssl.then_some(true),
            wired_tiger: self.wired_tiger.then_some(true),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Run the create command.
pub async fn run(
    config: &Config,
    command: CreateCommand,
    raw: bool,
    format: OutputFormat,
    options: FormatOptions,
) -> Result<()> {
    match command {
        CreateCommand::Deployment(args) => {
            create_deployment(config, &args, raw, format, options).await
        }
    }
}

async fn create_deployment(
    config: &Config,
    args: &CreateDeploymentArgs,
    raw: bool,
    format: OutputFormat,
    options: FormatOptions,
) -> Result<()> {
    if raw {
        return Err(UsageError::RawModeUnsupported("create deployment").into());
    }

    let mut params = args.to_params();
    params.validate()?;

    let client = build_client(config)?;
    let account = client.get_account().await?;
    params.account_id = account.id;

    info!(
        name = %params.name,
        database_type = %params.database_type,
        account = %account.slug,
        "Creating deployment"
    );
    let deployment = client.create_deployment(&params).await?;

    if let Some(message) = deployment.error_message() {
        return Err(ClientError::DeploymentRejected(message).into());
    }

    let formatter = get_formatter(format, options);
    output_result(&formatter.format_deployment(&deployment)?)
}
