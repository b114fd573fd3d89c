//! Node-related data models

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Health state of a testbed node as reported by the remote inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeState {
    Alive,
    Busy,
    Suspected,
    Error,
    /// State string not known to this client; kept verbatim
    Other(String),
}

impl From<String> for NodeState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Alive" => NodeState::Alive,
            "Busy" => NodeState::Busy,
            "Suspected" => NodeState::Suspected,
            "Error" => NodeState::Error,
            _ => NodeState::Other(value),
        }
    }
}

impl From<NodeState> for String {
    fn from(value: NodeState) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeState::Alive => write!(f, "Alive"),
            NodeState::Busy => write!(f, "Busy"),
            NodeState::Suspected => write!(f, "Suspected"),
            NodeState::Error => write!(f, "Error"),
            NodeState::Other(s) => write!(f, "{}", s),
        }
    }
}

impl NodeState {
    /// Suspected and Error nodes are excluded from firmware targeting and
    /// listed in the final summary.
    pub fn is_faulty(&self) -> bool {
        matches!(self, NodeState::Suspected | NodeState::Error)
    }
}

/// A single hardware node at a testbed site
///
/// Deserialized verbatim from the remote inventory response; never mutated
/// locally, only filtered and grouped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Architecture tag, colon-delimited prefix plus radio variant
    /// (e.g. `m3:at86rf231`)
    pub archi: String,
    /// Fully qualified network address; embeds the numeric node id
    /// (e.g. `m3-12.grenoble.iot-lab.info`)
    pub network_address: String,
    /// Hardware unique identifier
    #[serde(default)]
    pub uid: String,
    /// Reported health state
    pub state: NodeState,
}

impl Node {
    /// Colon-delimited prefix of the architecture tag (`m3:at86rf231` -> `m3`)
    pub fn archi_prefix(&self) -> &str {
        self.archi.split(':').next().unwrap_or(&self.archi)
    }
}

/// Parsed (architecture prefix, numeric id) pair used for the remote CLI's
/// node-specification syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    pub archi: String,
    pub id: String,
}

impl NodeIdentity {
    /// Derive the identity of a node from its architecture tag and network
    /// address.
    ///
    /// The numeric id is extracted by matching `<prefix>-(\d+).` against the
    /// network address. Addresses that do not follow this exact format yield
    /// `None`; callers log and skip such nodes.
    pub fn parse(node: &Node) -> Option<NodeIdentity> {
        let prefix = node.archi_prefix();
        if prefix.is_empty() {
            return None;
        }
        let pattern = format!(r"{}-(\d+)\.", regex::escape(prefix));
        let re = Regex::new(&pattern).ok()?;
        let captures = re.captures(&node.network_address)?;
        Some(NodeIdentity {
            archi: prefix.to_string(),
            id: captures[1].to_string(),
        })
    }

    /// Format as the remote CLI's `site,archi,id` node specification
    pub fn node_spec(&self, site: &str) -> String {
        format!("{},{},{}", site, self.archi, self.id)
    }
}
