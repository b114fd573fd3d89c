//! Serde mirrors of remote CLI JSON responses

use serde::Deserialize;

/// Generic `{"items": [...]}` wrapper used by the inventory listings
#[derive(Debug, Deserialize)]
pub struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Experiment submission response; only the assigned id is consumed
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::{Node, NodeState};
    use crate::models::site::SiteEntry;

    #[test]
    fn items_response_parses_site_listing() {
        let raw = r#"{"items":[{"site":"grenoble"},{"site":"lille"}]}"#;
        let parsed: ItemsResponse<SiteEntry> = serde_json::from_str(raw).unwrap();
        let sites: Vec<String> = parsed.items.into_iter().map(|s| s.site).collect();
        assert_eq!(sites, vec!["grenoble", "lille"]);
    }

    #[test]
    fn items_response_defaults_to_empty() {
        let parsed: ItemsResponse<SiteEntry> = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn items_response_parses_node_listing() {
        let raw = r#"{"items":[
            {"archi":"m3:at86rf231","network_address":"m3-12.grenoble.iot-lab.info","uid":"a276","state":"Alive"}
        ]}"#;
        let parsed: ItemsResponse<Node> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].state, NodeState::Alive);
    }

    #[test]
    fn submit_response_extracts_id() {
        let parsed: SubmitResponse = serde_json::from_str(r#"{"id":412789}"#).unwrap();
        assert_eq!(parsed.id, 412789);
    }
}
