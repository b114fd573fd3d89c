//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "labflow")]
#[command(
    about = "🧪 IoT Testbed Experiment Orchestrator - reserve nodes, flash firmware, report health!"
)]
pub struct Cli {
    /// Testbed account username
    #[arg(short = 'u', long)]
    pub username: String,

    /// Testbed account password
    #[arg(short = 'p', long)]
    pub password: String,

    /// Testbed site (interactive selection if omitted)
    #[arg(long)]
    pub site: Option<String>,

    /// Experiment duration in minutes (overrides the configured default)
    #[arg(short = 'd', long)]
    pub duration: Option<u32>,

    /// Architecture to reserve, or 'all' - skips the interactive chooser,
    /// for automation and scripting
    #[arg(long, help = "Architecture to reserve ('all' for every node)")]
    pub archi: Option<String>,

    /// Path to labflow.toml (defaults to the user configuration directory)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run the full pipeline: reserve, wait, flash, summarize (default)
    Run,
    /// List available sites
    Sites,
    /// List the node inventory for the chosen site
    Nodes {
        /// Only nodes in this state (e.g. Alive, Busy, Suspected)
        #[arg(short, long)]
        state: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
