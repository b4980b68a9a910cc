//! Delete a single workflow run.
//!
//! Flow: resolve (by identifier, or list + choose) → submit deletion → print one
//! success line. Any failure aborts the remaining steps and nothing is printed.

mod fetch;
mod list;
mod options;
mod resolve;
mod submit;

pub use fetch::fetch_run;
pub use list::{is_listed, list_deletable_runs};
pub use options::{DeleteOptions, RunTarget};
pub use resolve::{SELECT_PROMPT, resolve_run};
pub use submit::submit_deletion;

use crate::domain::{AppError, Run, Workflow};
use crate::ports::{ActionsClientFactory, RunChooser, Terminal};

pub const SUCCESS_MESSAGE: &str = "✓ Request to delete workflow submitted.";

/// A run confirmed to exist, together with the workflow it belongs to.
#[derive(Debug, Clone)]
pub struct ResolvedRun {
    pub run: Run,
    pub workflow: Workflow,
}

pub fn execute<F, T, C>(options: &DeleteOptions<F, T, C>) -> Result<ResolvedRun, AppError>
where
    F: ActionsClientFactory,
    T: Terminal,
    C: RunChooser,
{
    let client = options.client_factory().create()?;
    let resolved =
        resolve_run(options.target(), options.repo(), client.as_ref(), options.chooser())?;

    tracing::info!(
        repo = %options.repo(),
        run_id = resolved.run.id,
        workflow = %resolved.workflow.name,
        "deleting workflow run"
    );
    submit_deletion(client.as_ref(), options.repo(), &resolved.run)?;

    options.terminal().print_success(SUCCESS_MESSAGE)?;
    Ok(resolved)
}
