//! Custom error types for labflow

use std::fmt;

/// Main error type for labflow operations
#[derive(Debug)]
pub enum FlowError {
    /// Authentication failures; always fatal
    Auth(String),
    /// Configuration related errors
    Config(String),
    /// Site/node inventory errors
    Inventory(String),
    /// Experiment submission and wait errors
    Experiment(String),
    /// Firmware deployment errors
    Flash(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            FlowError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FlowError::Inventory(msg) => write!(f, "Inventory error: {}", msg),
            FlowError::Experiment(msg) => write!(f, "Experiment error: {}", msg),
            FlowError::Flash(msg) => write!(f, "Flash error: {}", msg),
            FlowError::Io(err) => write!(f, "I/O error: {}", err),
            FlowError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlowError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlowError {
    fn from(err: std::io::Error) -> Self {
        FlowError::Io(err)
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        FlowError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for FlowError {
    fn from(err: toml::de::Error) -> Self {
        FlowError::Serialization(err.to_string())
    }
}

/// Result type alias for labflow operations
pub type Result<T> = std::result::Result<T, FlowError>;
