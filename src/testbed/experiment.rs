//! Experiment submission and startup wait

use crate::errors::{FlowError, Result};
use crate::models::experiment::{ExperimentId, ExperimentSpec, WaitOutcome};
use crate::models::responses::SubmitResponse;
use crate::testbed::invoker::Invoker;

/// Submit an experiment reservation and return the assigned identifier.
///
/// Nodes that failed identity parsing were already excluded upstream; a spec
/// with no surviving nodes is abandoned as a failure. No retry on any
/// failure path.
pub async fn submit(invoker: &dyn Invoker, spec: &ExperimentSpec) -> Result<ExperimentId> {
    if spec.nodes.is_empty() {
        return Err(FlowError::Experiment(
            "no usable nodes survived identity parsing".to_string(),
        ));
    }

    let duration = spec.duration.to_string();
    let node_specs = spec.node_specs();
    let mut args = vec![
        "experiment",
        "submit",
        "-n",
        spec.name.as_str(),
        "-d",
        duration.as_str(),
    ];
    for node_spec in &node_specs {
        args.push("-l");
        args.push(node_spec.as_str());
    }

    let output = invoker.run(&args).await?;
    if !output.success() {
        return Err(FlowError::Experiment(format!(
            "submission rejected: {}",
            output.error_text()
        )));
    }

    let response: SubmitResponse = serde_json::from_str(&output.stdout).map_err(|e| {
        FlowError::Experiment(format!(
            "submission response carried no experiment id ({}): {}",
            e, output.stdout
        ))
    })?;

    Ok(ExperimentId(response.id))
}

/// Block until the experiment leaves the waiting state.
///
/// The wait response is plain text; `Running` and `Terminated` map to the
/// typed outcome, anything else is ambiguous. Ambiguity is the caller's to
/// log; this stage never aborts the pipeline.
pub async fn wait(invoker: &dyn Invoker, id: ExperimentId) -> Result<WaitOutcome> {
    let id_arg = id.to_string();
    let output = invoker
        .run(&["experiment", "wait", "-i", id_arg.as_str()])
        .await?;

    if !output.success() {
        return Ok(WaitOutcome::Ambiguous(output.error_text().to_string()));
    }
    Ok(WaitOutcome::classify(&output.stdout))
}
