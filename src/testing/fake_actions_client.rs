use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, RepoRef, Run, Workflow};
use crate::ports::{ActionsClient, ActionsClientFactory};

#[derive(Default)]
struct State {
    runs: Vec<Run>,
    workflows: Vec<Workflow>,
    forced_statuses: HashMap<String, u16>,
    requests: Vec<String>,
}

/// In-memory Actions API that records each request as `"<METHOD> <path>"`.
///
/// Unknown runs and workflows answer 404; deletes answer 202 unless a status is
/// forced for that request with [`FakeActionsClient::with_status`].
#[derive(Clone, Default)]
pub struct FakeActionsClient {
    state: Arc<Mutex<State>>,
}

impl FakeActionsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(self, run: Run) -> Self {
        self.state.lock().unwrap().runs.push(run);
        self
    }

    pub fn with_workflow(self, workflow: Workflow) -> Self {
        self.state.lock().unwrap().workflows.push(workflow);
        self
    }

    pub fn with_status(self, request: &str, status: u16) -> Self {
        self.state.lock().unwrap().forced_statuses.insert(request.to_string(), status);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    fn record(&self, method: &str, repo: &RepoRef, path: &str) -> Result<(), AppError> {
        let request = format!("{} repos/{}/{}", method, repo, path);
        let mut state = self.state.lock().unwrap();
        let forced = state.forced_statuses.get(&request).copied();
        state.requests.push(request);
        match forced {
            Some(status) if !(200..300).contains(&status) => {
                Err(AppError::Api { status, body: String::new() })
            }
            _ => Ok(()),
        }
    }
}

fn not_found() -> AppError {
    AppError::Api { status: 404, body: r#"{"message":"Not Found"}"#.to_string() }
}

impl ActionsClient for FakeActionsClient {
    fn get_run(&self, repo: &RepoRef, run_id: u64) -> Result<Run, AppError> {
        self.record("GET", repo, &format!("actions/runs/{}", run_id))?;
        let state = self.state.lock().unwrap();
        state.runs.iter().find(|run| run.id == run_id).cloned().ok_or_else(not_found)
    }

    fn list_runs(&self, repo: &RepoRef) -> Result<Vec<Run>, AppError> {
        self.record("GET", repo, "actions/runs")?;
        Ok(self.state.lock().unwrap().runs.clone())
    }

    fn list_workflows(&self, repo: &RepoRef) -> Result<Vec<Workflow>, AppError> {
        self.record("GET", repo, "actions/workflows")?;
        Ok(self.state.lock().unwrap().workflows.clone())
    }

    fn get_workflow(&self, repo: &RepoRef, workflow_id: u64) -> Result<Workflow, AppError> {
        self.record("GET", repo, &format!("actions/workflows/{}", workflow_id))?;
        let state = self.state.lock().unwrap();
        state
            .workflows
            .iter()
            .find(|workflow| workflow.id == workflow_id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn delete_run(&self, repo: &RepoRef, run_id: u64) -> Result<(), AppError> {
        self.record("POST", repo, &format!("actions/runs/{}/delete", run_id))
    }
}

pub struct FakeActionsClientFactory {
    pub client: FakeActionsClient,
}

impl FakeActionsClientFactory {
    pub fn new(client: FakeActionsClient) -> Self {
        Self { client }
    }
}

impl ActionsClientFactory for FakeActionsClientFactory {
    fn create(&self) -> Result<Box<dyn ActionsClient>, AppError> {
        Ok(Box::new(self.client.clone()))
    }
}
