//! Logging utilities and initialization for labflow

use anyhow::Result;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initialize logging for the labflow CLI
///
/// Diagnostics go to stderr so operator-facing progress output on stdout
/// stays clean.
pub fn init_cli_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    Builder::from_default_env()
        .target(Target::Stderr)
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    // Initialize panic logging
    #[cfg(debug_assertions)]
    log_panics::init();

    log::debug!("labflow logging initialized with level: {:?}", level);
    Ok(())
}
