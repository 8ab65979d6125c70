//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Derive output settings from the global flags.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use compose_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::{FormatOptions, OutputFormat};

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let format = OutputFormat::from_flags(cli.fmt);
    let options = FormatOptions {
        full_ca: cli.fullca,
    };

    match cli.command {
        Commands::Show { command } => {
            commands::show::run(&config, command, cli.raw, format, options).await?;
        }
        Commands::Create { command } => {
            commands::create::run(&config, command, cli.raw, format, options).await?;
        }
    }

    Ok(())
}
