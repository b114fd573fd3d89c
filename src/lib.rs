//! labflow - IoT Testbed Experiment Orchestrator
//!
//! labflow drives a full testbed session against the remote `iotlab` CLI:
//! operator authentication, site and node discovery, architecture selection,
//! experiment reservation, firmware deployment, and a final health summary.

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod models;
pub mod testbed;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;

/// labflow version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// labflow application name
pub const APP_NAME: &str = "labflow";
