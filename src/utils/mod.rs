//! Utility functions and helpers used throughout labflow

pub mod logging;
