//! Site and node inventory queries
//!
//! Each query parses an `{"items": [...]}` JSON response out of the remote
//! CLI's stdout. A failed invocation or malformed response degrades to an
//! empty list with a warning; downstream stages treat empty as "nothing
//! found" and abort the run.

use crate::errors::Result;
use crate::models::node::Node;
use crate::models::responses::ItemsResponse;
use crate::models::site::SiteEntry;
use crate::testbed::invoker::{CommandOutput, Invoker};
use serde::de::DeserializeOwned;

/// Fetch the list of available site names
pub async fn fetch_sites(invoker: &dyn Invoker) -> Result<Vec<String>> {
    let output = invoker.run(&["status", "--sites"]).await?;
    let entries: Vec<SiteEntry> = parse_items(&output, "site listing");
    Ok(entries.into_iter().map(|entry| entry.site).collect())
}

/// Fetch the full node inventory for a site
pub async fn fetch_nodes(invoker: &dyn Invoker, site: &str) -> Result<Vec<Node>> {
    fetch_nodes_with_state(invoker, site, None).await
}

/// Fetch the nodes currently reported Alive at a site
pub async fn fetch_alive_nodes(invoker: &dyn Invoker, site: &str) -> Result<Vec<Node>> {
    fetch_nodes_with_state(invoker, site, Some("Alive")).await
}

/// Fetch the node inventory for a site, optionally filtered by state
pub async fn fetch_nodes_with_state(
    invoker: &dyn Invoker,
    site: &str,
    state: Option<&str>,
) -> Result<Vec<Node>> {
    let mut args = vec!["status", "--nodes", "--site", site];
    if let Some(state) = state {
        args.push("--state");
        args.push(state);
    }
    let output = invoker.run(&args).await?;
    Ok(parse_items(&output, "node listing"))
}

/// Nodes reported Suspected or Error. Computed once from the full site
/// inventory, not the Alive subset, so the summary reflects every faulty
/// node at the site.
pub fn suspected_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.state.is_faulty())
        .cloned()
        .collect()
}

fn parse_items<T: DeserializeOwned>(output: &CommandOutput, what: &str) -> Vec<T> {
    if !output.success() {
        log::warn!("Fetching {} failed: {}", what, output.error_text());
        return Vec::new();
    }
    match serde_json::from_str::<ItemsResponse<T>>(&output.stdout) {
        Ok(response) => response.items,
        Err(e) => {
            log::warn!("Failed to parse {} response as JSON: {}", what, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::NodeState;

    fn node(address: &str, state: NodeState) -> Node {
        Node {
            archi: "m3:at86rf231".to_string(),
            network_address: address.to_string(),
            uid: String::new(),
            state,
        }
    }

    #[test]
    fn suspected_filter_keeps_faulty_states_only() {
        let nodes = vec![
            node("m3-1.lille.iot-lab.info", NodeState::Alive),
            node("m3-2.lille.iot-lab.info", NodeState::Suspected),
            node("m3-3.lille.iot-lab.info", NodeState::Error),
            node("m3-4.lille.iot-lab.info", NodeState::Busy),
        ];
        let suspected = suspected_nodes(&nodes);
        let addresses: Vec<&str> = suspected
            .iter()
            .map(|n| n.network_address.as_str())
            .collect();
        assert_eq!(
            addresses,
            vec!["m3-2.lille.iot-lab.info", "m3-3.lille.iot-lab.info"]
        );
    }

    #[test]
    fn malformed_response_degrades_to_empty() {
        let output = CommandOutput {
            status_ok: true,
            stdout: "not json".to_string(),
            stderr: String::new(),
        };
        let items: Vec<Node> = parse_items(&output, "node listing");
        assert!(items.is_empty());
    }

    #[test]
    fn failed_invocation_degrades_to_empty() {
        let output = CommandOutput {
            status_ok: false,
            stdout: String::new(),
            stderr: "HTTP 503".to_string(),
        };
        let items: Vec<Node> = parse_items(&output, "node listing");
        assert!(items.is_empty());
    }
}
