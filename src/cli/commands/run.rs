//! Full pipeline command: authenticate, resolve a site, inventory nodes,
//! choose an architecture, reserve an experiment, wait, flash, summarize.
//!
//! The stages run strictly in sequence; each stage's output is the next
//! stage's input, and a stage whose required input is empty aborts the run.

use crate::cli::args::Cli;
use crate::config::FlowConfig;
use crate::console::chooser::{self, ArchChoice};
use crate::console::report;
use crate::models::experiment::ExperimentSpec;
use crate::models::node::{Node, NodeIdentity};
use crate::testbed::{auth, experiment, flash, inventory, IotlabCli};
use anyhow::{bail, Context, Result};
use std::io::BufRead;

pub async fn execute_run_command(cli: &Cli, config: &FlowConfig) -> Result<()> {
    let invoker = IotlabCli::new();
    invoker.check_available()?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    // Stage 1: authenticate
    auth::authenticate(&invoker, &cli.username, &cli.password)
        .await
        .context("Authentication failed. Check your credentials.")?;
    println!("\n✅ User '{}' authenticated successfully.", cli.username);

    // Stage 2: resolve the site
    let site = resolve_site(cli, &invoker, &mut input).await?;

    // Stage 3: node inventory, full set first for the health report
    let all_nodes = inventory::fetch_nodes(&invoker, &site).await?;
    if all_nodes.is_empty() {
        bail!("No nodes found at site {}.", site);
    }
    let suspected = inventory::suspected_nodes(&all_nodes);
    if suspected.is_empty() {
        println!("\nNo suspected or error nodes found.");
    }

    println!("\n🔍 Checking available nodes at site: {}...", site);
    let available = inventory::fetch_alive_nodes(&invoker, &site).await?;
    if available.is_empty() {
        bail!("No available nodes at site {}.", site);
    }
    report::print_available_nodes(&available);

    // Stage 4: architecture selection
    let choice = resolve_architecture(cli, &available, &mut input)?;
    let selected = chooser::filter_by_architecture(&available, &choice);
    if selected.is_empty() {
        bail!("No nodes found for the chosen architecture.");
    }

    // Stage 5: submit the reservation
    let duration = config.resolve_duration(cli.duration);
    println!("\n🚀 Launching experiment at site {}...", site);
    let identities = parse_identities(&selected);
    let spec = ExperimentSpec::new(&site, &config.experiment.name_suffix, duration, identities);
    let experiment_id = experiment::submit(&invoker, &spec)
        .await
        .context("Failed to launch experiment.")?;
    println!(
        "✅ Experiment launched successfully! Experiment ID: {}",
        experiment_id
    );

    // Stage 6: wait for startup; ambiguity never aborts
    println!("⏳ Waiting for experiment {} to start...", experiment_id);
    let outcome = experiment::wait(&invoker, experiment_id).await?;
    if outcome.started() {
        println!("✅ Experiment has started.");
    } else {
        println!("⚠️  Error or timeout while waiting for the experiment.");
        log::warn!("Ambiguous wait state for experiment {}: {:?}", experiment_id, outcome);
    }

    // Stage 7: firmware deployment, per-architecture failure isolation
    let flash_reports = flash::deploy(&invoker, &site, &config.firmware, &selected).await?;

    // Stage 8: summary against the full inventory's health data
    report::print_summary(experiment_id, &selected, &suspected, &flash_reports);
    Ok(())
}

/// Site from the flag, or interactively from the live site list
async fn resolve_site(
    cli: &Cli,
    invoker: &IotlabCli,
    input: &mut impl BufRead,
) -> Result<String> {
    if let Some(site) = &cli.site {
        return Ok(site.clone());
    }

    println!("\n🔍 Fetching available sites...");
    let sites = inventory::fetch_sites(invoker).await?;
    if sites.is_empty() {
        bail!("No sites available.");
    }
    println!("Available sites: {}", sites.join(", "));

    let site = chooser::prompt_line("Please select a site: ", input)?;
    if !sites.contains(&site) {
        bail!("Invalid site: {}.", site);
    }
    Ok(site)
}

/// Architecture from the flag (automation mode), or the interactive chooser
fn resolve_architecture(
    cli: &Cli,
    available: &[Node],
    input: &mut impl BufRead,
) -> Result<ArchChoice> {
    let architectures = chooser::distinct_architectures(available);
    if architectures.is_empty() {
        bail!("No architectures found in the available nodes.");
    }

    match cli.archi.as_deref() {
        Some("all") => Ok(ArchChoice::All),
        Some(archi) => {
            if !architectures.iter().any(|a| a == archi) {
                bail!(
                    "Architecture '{}' not present at this site (available: {}).",
                    archi,
                    architectures.join(", ")
                );
            }
            Ok(ArchChoice::One(archi.to_string()))
        }
        None => {
            println!("\nAvailable Architectures:");
            Ok(chooser::choose_architecture(&architectures, input)?)
        }
    }
}

/// Identities of the nodes going into the reservation; unparseable nodes are
/// logged and dropped
fn parse_identities(nodes: &[Node]) -> Vec<NodeIdentity> {
    nodes
        .iter()
        .filter_map(|node| match NodeIdentity::parse(node) {
            Some(identity) => Some(identity),
            None => {
                log::warn!("Unable to parse node: {}", node.network_address);
                None
            }
        })
        .collect()
}
