//! CLI command implementations

pub mod nodes;
pub mod run;
pub mod sites;

use crate::cli::args::{Cli, Commands};
use crate::config::FlowConfig;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute_command(command: Commands, cli: &Cli, config: &FlowConfig) -> Result<()> {
    match command {
        Commands::Run => run::execute_run_command(cli, config).await,
        Commands::Sites => sites::execute_sites_command(cli).await,
        Commands::Nodes { state } => nodes::execute_nodes_command(cli, state.as_deref()).await,
    }
}
