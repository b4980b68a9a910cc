//! Actions API client port definition.

use crate::domain::{AppError, RepoRef, Run, Workflow};

/// Port for the workflow-run endpoints of the Actions REST API.
///
/// Non-success responses surface as [`AppError::Api`] carrying the HTTP status
/// and body; callers decide which statuses deserve a friendlier message.
pub trait ActionsClient {
    /// `GET repos/{repo}/actions/runs/{run_id}`.
    fn get_run(&self, repo: &RepoRef, run_id: u64) -> Result<Run, AppError>;

    /// `GET repos/{repo}/actions/runs`, most recent first.
    fn list_runs(&self, repo: &RepoRef) -> Result<Vec<Run>, AppError>;

    /// `GET repos/{repo}/actions/workflows`.
    fn list_workflows(&self, repo: &RepoRef) -> Result<Vec<Workflow>, AppError>;

    /// `GET repos/{repo}/actions/workflows/{workflow_id}`.
    fn get_workflow(&self, repo: &RepoRef, workflow_id: u64) -> Result<Workflow, AppError>;

    /// `POST repos/{repo}/actions/runs/{run_id}/delete`.
    fn delete_run(&self, repo: &RepoRef, run_id: u64) -> Result<(), AppError>;
}

/// Builds an [`ActionsClient`] on demand so credentials are only read when needed.
pub trait ActionsClientFactory {
    fn create(&self) -> Result<Box<dyn ActionsClient>, AppError>;
}
