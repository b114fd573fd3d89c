//! Subprocess invocation of the external testbed CLI

use crate::errors::{FlowError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// External CLI binary driving the remote testbed service
pub const IOTLAB_PROGRAM: &str = "iotlab";

/// Captured result of one remote CLI invocation
///
/// The exit status is carried structurally so callers check success without
/// scraping output text. Substring inspection remains only where the remote
/// interface offers nothing better (wait states, flash error text).
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status_ok: bool,
    /// Trimmed standard output
    pub stdout: String,
    /// Trimmed standard error
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_ok
    }

    /// Best error text available: stderr when present, stdout otherwise
    pub fn error_text(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Single point of contact with the external testbed CLI
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Run the CLI with the given arguments, capturing both streams
    async fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

/// Production invoker spawning the `iotlab` binary
pub struct IotlabCli {
    program: String,
}

impl IotlabCli {
    pub fn new() -> Self {
        Self {
            program: IOTLAB_PROGRAM.to_string(),
        }
    }

    /// Fail fast when the external CLI is not installed
    pub fn check_available(&self) -> Result<()> {
        which::which(&self.program).map_err(|_| {
            FlowError::Config(format!(
                "'{}' not found on PATH; install the testbed CLI tools before running labflow",
                self.program
            ))
        })?;
        Ok(())
    }
}

impl Default for IotlabCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Invoker for IotlabCli {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        log::debug!("Executing: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                FlowError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to run '{} {}': {}", self.program, args.join(" "), e),
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            log::warn!(
                "{} {} exited with {}: {}",
                self.program,
                args.first().unwrap_or(&""),
                output.status,
                stderr
            );
        }

        Ok(CommandOutput {
            status_ok: output.status.success(),
            stdout,
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_prefers_stderr() {
        let output = CommandOutput {
            status_ok: false,
            stdout: "partial".to_string(),
            stderr: "boom".to_string(),
        };
        assert_eq!(output.error_text(), "boom");

        let output = CommandOutput {
            status_ok: false,
            stdout: "only stdout".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.error_text(), "only stdout");
    }
}
