//! Remote testbed command surface
//!
//! Everything the remote service does (authentication, inventory, experiment
//! scheduling, node flashing) is reached through subprocess invocations of
//! the external `iotlab` CLI. The [`invoker::Invoker`] trait is the single
//! point of contact; the other modules wrap individual remote operations.

pub mod auth;
pub mod experiment;
pub mod flash;
pub mod inventory;
pub mod invoker;

pub use invoker::{CommandOutput, Invoker, IotlabCli};
