//! Nodes command implementation

use crate::cli::args::Cli;
use crate::console::report;
use crate::testbed::{auth, inventory, IotlabCli};
use anyhow::{bail, Context, Result};

pub async fn execute_nodes_command(cli: &Cli, state: Option<&str>) -> Result<()> {
    let Some(site) = &cli.site else {
        bail!("The nodes command requires --site.");
    };

    let invoker = IotlabCli::new();
    invoker.check_available()?;

    auth::authenticate(&invoker, &cli.username, &cli.password)
        .await
        .context("Authentication failed. Check your credentials.")?;

    println!("\n🔍 Checking nodes at site: {}...", site);
    let nodes = inventory::fetch_nodes_with_state(&invoker, site, state).await?;
    if nodes.is_empty() {
        bail!("No nodes found at site {}.", site);
    }

    report::print_available_nodes(&nodes);

    let suspected = inventory::suspected_nodes(&nodes);
    if !suspected.is_empty() {
        println!(
            "\n⚠️  {} node(s) reported Suspected or Error.",
            suspected.len()
        );
    }
    Ok(())
}
