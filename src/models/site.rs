//! Site inventory models

use serde::{Deserialize, Serialize};

/// One row of the remote site listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteEntry {
    /// Site name (e.g. `grenoble`); opaque to this client
    pub site: String,
}
