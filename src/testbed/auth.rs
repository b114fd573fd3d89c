//! Operator authentication against the remote service

use crate::errors::{FlowError, Result};
use crate::testbed::invoker::Invoker;

/// Validate the operator's credentials. Failure is fatal for the whole run;
/// there is no retry.
pub async fn authenticate(invoker: &dyn Invoker, username: &str, password: &str) -> Result<()> {
    log::debug!("Checking credentials for user '{}'", username);
    let output = invoker
        .run(&["auth", "-u", username, "-p", password])
        .await?;

    if output.success() {
        Ok(())
    } else {
        Err(FlowError::Auth(format!(
            "credential check failed for user '{}': {}",
            username,
            output.error_text()
        )))
    }
}
