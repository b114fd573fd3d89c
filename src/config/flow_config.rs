//! Application configuration management
//!
//! Settings are read from `labflow.toml`, either an explicit `--config` path
//! or `<user config dir>/labflow/labflow.toml`. Missing file and missing keys
//! fall back to built-in defaults.

use crate::errors::{FlowError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Experiment reservation defaults
    pub experiment: ExperimentConfig,
    /// Architecture prefix -> firmware image path
    pub firmware: BTreeMap<String, PathBuf>,
}

/// Experiment-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Default experiment duration in minutes, used when no --duration flag
    /// is given
    pub duration: u32,
    /// Suffix appended to the site name to form the experiment name
    pub name_suffix: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            experiment: ExperimentConfig::default(),
            firmware: default_firmware_table(),
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            duration: 10,
            name_suffix: "Experiment".to_string(),
        }
    }
}

/// Built-in firmware table covering the supported architectures
pub fn default_firmware_table() -> BTreeMap<String, PathBuf> {
    [
        "nrf51dk",
        "nrf52dk",
        "nrf52840dk",
        "samr21",
        "m3",
        "arduino-zero",
    ]
    .iter()
    .map(|archi| {
        (
            archi.to_string(),
            PathBuf::from(format!("Firmwares/{}_test.elf", archi)),
        )
    })
    .collect()
}

impl FlowConfig {
    /// Load configuration, resolved before the pipeline runs.
    ///
    /// An explicit path must exist and parse; the default location is
    /// optional and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FlowError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: FlowConfig = toml::from_str(&raw)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("labflow").join("labflow.toml"))
    }

    /// Effective experiment duration: the command-line flag wins over the
    /// configured default.
    pub fn resolve_duration(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.experiment.duration)
    }
}
