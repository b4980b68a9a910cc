//! Run Fetcher: explicit identifier to run record.

use crate::domain::{AppError, RepoRef};
use crate::ports::ActionsClient;

use super::ResolvedRun;

const NOT_FOUND: u16 = 404;

/// Fetch a run by identifier, then the workflow it belongs to.
///
/// A 404 on the run itself becomes [`AppError::RunNotFound`]; every other
/// failure is passed through unchanged. Run IDs are decimal integers, so any
/// other identifier is reported as not found without a request being sent.
pub fn fetch_run(
    client: &dyn ActionsClient,
    repo: &RepoRef,
    run_id: &str,
) -> Result<ResolvedRun, AppError> {
    let id = parse_run_id(run_id).ok_or_else(|| AppError::RunNotFound(run_id.to_string()))?;
    let run = client.get_run(repo, id).map_err(|err| match err.status() {
        Some(NOT_FOUND) => AppError::RunNotFound(run_id.to_string()),
        _ => err,
    })?;

    let workflow = client.get_workflow(repo, run.workflow_id)?;
    tracing::debug!(
        run_id = run.id,
        status = %run.status,
        workflow = %workflow.name,
        "fetched run"
    );
    Ok(ResolvedRun { run, workflow })
}

/// Strict decimal parse; `u64::from_str` alone would also accept a leading `+`.
fn parse_run_id(run_id: &str) -> Option<u64> {
    if run_id.is_empty() || !run_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    run_id.parse().ok()
}
