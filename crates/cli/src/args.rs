//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read the API token; it only comes from `COMPOSEAPITOKEN`.

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "cocli")]
#[command(about = "Compose CLI - Manage Compose deployments from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  cocli show deployments\n  cocli --fmt show recipes 5854017e89d50f424e000300\n  cocli --raw show clusters\n  cocli create deployment orders mongodb --datacenter aws:us-east-1\n\nThe API token is read from the COMPOSEAPITOKEN environment variable (or a .env file).\n"
)]
pub struct Cli {
    /// Print the API response body as-is (re-indented), ignoring other output flags
    #[arg(long, global = true)]
    pub raw: bool,

    /// Print labeled text instead of JSON
    #[arg(long, global = true)]
    pub fmt: bool,

    /// Print CA certificates in full in text output
    #[arg(long, global = true)]
    pub fullca: bool,

    /// Base URL of the Compose API (e.g., https://api.compose.io/2016-07/)
    #[arg(long, global = true, env = "COMPOSE_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "COMPOSE_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show account, deployment, recipe, cluster, datacenter, database or user details
    Show {
        #[command(subcommand)]
        command: commands::show::ShowCommand,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        command: commands::create::CreateCommand,
    },
}
