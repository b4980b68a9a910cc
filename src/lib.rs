//! run-delete: delete a single GitHub Actions workflow run.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::delete_run;
pub use app::commands::delete::{DeleteOptions, ResolvedRun, RunTarget, SUCCESS_MESSAGE};
pub use domain::{AppError, RepoRef, Run, RunConclusion, RunStatus, Workflow};
