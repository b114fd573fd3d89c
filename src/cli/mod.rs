//! Command Line Interface module
//!
//! Argument parsing and the implementations of the labflow commands.

pub mod args;
pub mod commands;

pub use args::*;

use crate::config::FlowConfig;
use crate::utils::logging;
use anyhow::Result;

/// Main CLI application runner
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    logging::init_cli_logging(cli.verbose, cli.quiet)?;

    let config = FlowConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Some(command) => commands::execute_command(command.clone(), &cli, &config).await,
        None => commands::run::execute_run_command(&cli, &config).await,
    }
}
