//! Deletable-Run Lister: candidates for the interactive chooser.

use std::collections::HashMap;

use crate::domain::{AppError, RepoRef, Run, SelectionCandidate, Workflow};
use crate::ports::ActionsClient;

/// Whether a run is shown in the interactive list.
///
/// This is a display filter only; the server decides deletability when the
/// delete request is issued.
///
/// `gh run delete` historically offered only in-progress runs here (its tests
/// list an in-progress run and reject a completed one). This command lists
/// completed runs instead, matching the `found no completed runs to delete`
/// message; see `in_progress_run_is_not_offered` before flipping it.
pub fn is_listed(run: &Run) -> bool {
    run.is_completed()
}

/// List completed runs joined with their workflows, in the order the API returns them.
///
/// Runs whose workflow is unknown are skipped. An empty result is
/// [`AppError::NoCompletedRuns`].
pub fn list_deletable_runs(
    client: &dyn ActionsClient,
    repo: &RepoRef,
) -> Result<Vec<SelectionCandidate>, AppError> {
    let runs = client.list_runs(repo)?;
    let workflows = client.list_workflows(repo)?;

    let candidates = select_candidates(runs, &workflows);
    tracing::debug!(candidates = candidates.len(), "listed deletable runs");

    if candidates.is_empty() {
        return Err(AppError::NoCompletedRuns);
    }
    Ok(candidates)
}

fn select_candidates(runs: Vec<Run>, workflows: &[Workflow]) -> Vec<SelectionCandidate> {
    let by_id: HashMap<u64, &Workflow> =
        workflows.iter().map(|workflow| (workflow.id, workflow)).collect();

    runs.into_iter()
        .filter(is_listed)
        .filter_map(|run| match by_id.get(&run.workflow_id) {
            Some(workflow) => Some(SelectionCandidate::new(run, (*workflow).clone())),
            None => {
                tracing::debug!(
                    run_id = run.id,
                    workflow_id = run.workflow_id,
                    "skipping run with unknown workflow"
                );
                None
            }
        })
        .collect()
}
