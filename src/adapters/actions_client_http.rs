//! Actions API client implementation using reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{ApiConfig, AppError, RepoRef, Run, Workflow};
use crate::ports::{ActionsClient, ActionsClientFactory};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const PAGE_SIZE: &str = "100";

/// HTTP transport for the Actions API.
///
/// Each call performs exactly one request. Non-success responses are returned
/// as [`AppError::Api`] with the raw body.
#[derive(Clone)]
pub struct HttpActionsClient {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpActionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpActionsClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpActionsClient {
    /// Create a new HTTP client with an optional bearer token.
    pub fn new(token: Option<String>, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.base_url(), token, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Internal(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, concat!("run-delete/", env!("CARGO_PKG_VERSION")))
            .header(X_GITHUB_API_VERSION, API_VERSION);
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        Ok(builder)
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read error response: {}", e)))?;
        Err(AppError::Api { status: status.as_u16(), body })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, paged: bool) -> Result<T, AppError> {
        let mut builder = self.request(Method::GET, path)?;
        if paged {
            builder = builder.query(&[("per_page", PAGE_SIZE)]);
        }

        let response = self.send(builder)?;
        let body = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Transport(format!("Failed to parse response: {}", e)))
    }
}

#[derive(Debug, Deserialize)]
struct RunsPayload {
    #[serde(default)]
    workflow_runs: Vec<Run>,
}

#[derive(Debug, Deserialize)]
struct WorkflowsPayload {
    #[serde(default)]
    workflows: Vec<Workflow>,
}

fn repo_path(repo: &RepoRef) -> String {
    format!("repos/{}/{}", repo.owner(), repo.name())
}

impl ActionsClient for HttpActionsClient {
    fn get_run(&self, repo: &RepoRef, run_id: u64) -> Result<Run, AppError> {
        self.get_json(&format!("{}/actions/runs/{}", repo_path(repo), run_id), false)
    }

    fn list_runs(&self, repo: &RepoRef) -> Result<Vec<Run>, AppError> {
        let payload: RunsPayload =
            self.get_json(&format!("{}/actions/runs", repo_path(repo)), true)?;
        Ok(payload.workflow_runs)
    }

    fn list_workflows(&self, repo: &RepoRef) -> Result<Vec<Workflow>, AppError> {
        let payload: WorkflowsPayload =
            self.get_json(&format!("{}/actions/workflows", repo_path(repo)), true)?;
        Ok(payload.workflows)
    }

    fn get_workflow(&self, repo: &RepoRef, workflow_id: u64) -> Result<Workflow, AppError> {
        self.get_json(&format!("{}/actions/workflows/{}", repo_path(repo), workflow_id), false)
    }

    fn delete_run(&self, repo: &RepoRef, run_id: u64) -> Result<(), AppError> {
        let path = format!("{}/actions/runs/{}/delete", repo_path(repo), run_id);
        let builder = self.request(Method::POST, &path)?;
        self.send(builder)?;
        Ok(())
    }
}

/// Factory that builds [`HttpActionsClient`]s from configuration and a token.
#[derive(Debug, Clone)]
pub struct HttpActionsClientFactory {
    config: ApiConfig,
    token: Option<String>,
}

impl HttpActionsClientFactory {
    pub fn new(config: ApiConfig, token: Option<String>) -> Self {
        Self { config, token }
    }
}

impl ActionsClientFactory for HttpActionsClientFactory {
    fn create(&self) -> Result<Box<dyn ActionsClient>, AppError> {
        Ok(Box::new(HttpActionsClient::new(self.token.clone(), &self.config)?))
    }
}
