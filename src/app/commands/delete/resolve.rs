//! Run Resolver: turns the command target into exactly one run.

use crate::domain::{AppError, RepoRef};
use crate::ports::{ActionsClient, RunChooser};

use super::fetch::fetch_run;
use super::list::list_deletable_runs;
use super::options::RunTarget;
use super::ResolvedRun;

pub const SELECT_PROMPT: &str = "Select a workflow run";

pub fn resolve_run(
    target: &RunTarget,
    repo: &RepoRef,
    client: &dyn ActionsClient,
    chooser: &dyn RunChooser,
) -> Result<ResolvedRun, AppError> {
    match target {
        RunTarget::Id(run_id) => {
            tracing::debug!(%run_id, "resolving run by identifier");
            fetch_run(client, repo, run_id)
        }
        RunTarget::Prompt => {
            tracing::debug!("resolving run interactively");
            let candidates = list_deletable_runs(client, repo)?;
            let labels: Vec<String> =
                candidates.iter().map(|candidate| candidate.label.clone()).collect();

            let index = chooser.choose(SELECT_PROMPT, &labels)?;
            let count = candidates.len();
            let candidate = candidates.into_iter().nth(index).ok_or_else(|| {
                AppError::Internal(format!(
                    "chooser returned index {} for {} candidates",
                    index, count
                ))
            })?;

            Ok(ResolvedRun { run: candidate.run, workflow: candidate.workflow })
        }
    }
}
