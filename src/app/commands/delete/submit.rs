//! Deletion Executor.

use crate::domain::{AppError, RepoRef, Run};
use crate::ports::ActionsClient;

const CONFLICT: u16 = 409;

/// Request deletion of `run`. The server's answer is authoritative: a 409 means
/// the run has not finished, whatever its fetched status said.
pub fn submit_deletion(
    client: &dyn ActionsClient,
    repo: &RepoRef,
    run: &Run,
) -> Result<(), AppError> {
    client.delete_run(repo, run.id).map_err(|err| match err.status() {
        Some(CONFLICT) => AppError::RunNotDeletable,
        _ => err,
    })?;
    tracing::debug!(run_id = run.id, "deletion accepted");
    Ok(())
}
