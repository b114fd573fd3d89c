//! Error types for labflow

pub mod types;

pub use types::*;
