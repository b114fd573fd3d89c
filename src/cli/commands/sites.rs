//! Sites command implementation

use crate::cli::args::Cli;
use crate::testbed::{auth, inventory, IotlabCli};
use anyhow::{bail, Context, Result};

pub async fn execute_sites_command(cli: &Cli) -> Result<()> {
    let invoker = IotlabCli::new();
    invoker.check_available()?;

    auth::authenticate(&invoker, &cli.username, &cli.password)
        .await
        .context("Authentication failed. Check your credentials.")?;

    println!("\n🔍 Fetching available sites...");
    let sites = inventory::fetch_sites(&invoker).await?;
    if sites.is_empty() {
        bail!("No sites available.");
    }

    println!("🎯 Found {} site(s):", sites.len());
    for site in &sites {
        println!("  - {}", site);
    }
    Ok(())
}
