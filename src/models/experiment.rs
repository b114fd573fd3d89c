//! Experiment reservation models

use crate::models::node::NodeIdentity;

/// Experiment identifier assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentId(pub u64);

impl std::fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reservation request built locally and handed to the remote scheduler
#[derive(Debug, Clone)]
pub struct ExperimentSpec {
    pub site: String,
    pub name: String,
    /// Duration in minutes
    pub duration: u32,
    /// Nodes that survived identity parsing
    pub nodes: Vec<NodeIdentity>,
}

impl ExperimentSpec {
    pub fn new(site: &str, name_suffix: &str, duration: u32, nodes: Vec<NodeIdentity>) -> Self {
        Self {
            site: site.to_string(),
            name: format!("{}_{}", site, name_suffix),
            duration,
            nodes,
        }
    }

    /// Node specifications in the remote CLI's `site,archi,id` syntax
    pub fn node_specs(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.node_spec(&self.site)).collect()
    }
}

/// Typed result of waiting for an experiment to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Running,
    Terminated,
    /// The wait response matched neither known state; carries the raw text
    Ambiguous(String),
}

impl WaitOutcome {
    /// Classify the textual wait response. The remote interface offers no
    /// structured state here, so substring inspection is the documented
    /// fallback.
    pub fn classify(text: &str) -> WaitOutcome {
        if text.contains("Running") {
            WaitOutcome::Running
        } else if text.contains("Terminated") {
            WaitOutcome::Terminated
        } else {
            WaitOutcome::Ambiguous(text.to_string())
        }
    }

    pub fn started(&self) -> bool {
        matches!(self, WaitOutcome::Running | WaitOutcome::Terminated)
    }
}
