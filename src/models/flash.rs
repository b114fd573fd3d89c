//! Firmware deployment models

/// Result of one per-architecture flash attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashOutcome {
    /// Firmware written to this many nodes
    Flashed(usize),
    /// No reserved node carries this architecture
    SkippedNoNodes,
    /// Nodes were present but none yielded a parseable identity
    SkippedUnparseable,
    /// The flash command failed; carries the reported error text
    Failed(String),
}

/// Per-architecture deployment report shown in the final summary
#[derive(Debug, Clone)]
pub struct FlashReport {
    pub archi: String,
    pub outcome: FlashOutcome,
}

impl FlashReport {
    pub fn describe(&self) -> String {
        match &self.outcome {
            FlashOutcome::Flashed(count) => format!("flashed {} node(s)", count),
            FlashOutcome::SkippedNoNodes => "skipped (no nodes)".to_string(),
            FlashOutcome::SkippedUnparseable => "skipped (no parseable node ids)".to_string(),
            FlashOutcome::Failed(reason) => format!("failed: {}", reason),
        }
    }
}
