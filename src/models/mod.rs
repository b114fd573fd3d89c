//! Data models and types used throughout labflow

pub mod experiment;
pub mod flash;
pub mod node;
pub mod responses;
pub mod site;

// Re-export commonly used types
pub use experiment::*;
pub use flash::*;
pub use node::*;
pub use responses::*;
pub use site::*;
