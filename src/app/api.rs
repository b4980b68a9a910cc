//! Library entry points wiring real adapters into commands.

use std::env;

use crate::adapters::config_file::{load_config, token_from_env};
use crate::adapters::{DialoguerRunChooser, HttpActionsClientFactory, StdTerminal};
use crate::app::commands::delete::{self, DeleteOptions, ResolvedRun, RunTarget};
use crate::app::configuration::{REPO_ENV, resolve_repository};
use crate::domain::AppError;
use crate::ports::Terminal;

/// Delete one workflow run, by identifier or, on a terminal, from a list.
///
/// `repo` overrides repository detection (`OWNER/REPO`).
pub fn delete_run(run_id: Option<String>, repo: Option<&str>) -> Result<ResolvedRun, AppError> {
    let terminal = StdTerminal::new();
    let target = RunTarget::from_args(run_id, terminal.can_prompt())?;

    let cwd = env::current_dir()?;
    let repo_env = env::var(REPO_ENV).ok();
    let repo = resolve_repository(repo, repo_env.as_deref(), &cwd)?;

    let config = load_config()?;
    let factory = HttpActionsClientFactory::new(config.api, token_from_env());

    let options =
        DeleteOptions::with_target(target, repo, factory, terminal, DialoguerRunChooser::new());
    delete::execute(&options)
}
