//! Workflow run and workflow records as returned by the Actions API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Requested,
    Waiting,
    Pending,
    /// Any status value this crate does not know about yet.
    #[serde(untagged)]
    Other(String),
}

impl RunStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::Completed => "completed",
            RunStatus::Requested => "requested",
            RunStatus::Waiting => "waiting",
            RunStatus::Pending => "pending",
            RunStatus::Other(value) => value,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a run that reached the `completed` status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunConclusion {
    Success,
    Failure,
    Cancelled,
    Neutral,
    Skipped,
    Stale,
    TimedOut,
    ActionRequired,
    #[serde(untagged)]
    Other(String),
}

/// A single execution of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_title: String,
    pub status: RunStatus,
    /// Absent (or empty on the wire) until the run has finished.
    #[serde(default, deserialize_with = "conclusion_or_none")]
    pub conclusion: Option<RunConclusion>,
    pub workflow_id: u64,
    #[serde(default)]
    pub head_branch: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub created_at: String,
}

impl Run {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Title shown to users; older API versions only populate `name`.
    pub fn title(&self) -> &str {
        if self.display_title.is_empty() { &self.name } else { &self.display_title }
    }

    pub fn display(&self) -> String {
        if self.head_branch.is_empty() {
            self.title().to_string()
        } else {
            format!("{} ({})", self.title(), self.head_branch)
        }
    }

    /// Single-glyph summary of status and conclusion.
    pub fn symbol(&self) -> &'static str {
        if !self.is_completed() {
            return "*";
        }
        match self.conclusion {
            Some(RunConclusion::Success) => "✓",
            Some(RunConclusion::Failure)
            | Some(RunConclusion::TimedOut)
            | Some(RunConclusion::Cancelled)
            | Some(RunConclusion::ActionRequired) => "X",
            _ => "-",
        }
    }
}

fn conclusion_or_none<'de, D>(deserializer: D) -> Result<Option<RunConclusion>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()).map(|value| {
        serde_json::from_value(serde_json::Value::String(value.clone()))
            .unwrap_or(RunConclusion::Other(value))
    }))
}

/// Reusable workflow definition a run is an instance of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub state: String,
}

/// A run offered in the interactive chooser, paired with its workflow.
#[derive(Debug, Clone)]
pub struct SelectionCandidate {
    pub run: Run,
    pub workflow: Workflow,
    pub label: String,
}

impl SelectionCandidate {
    pub fn new(run: Run, workflow: Workflow) -> Self {
        let label = format!("{} {} · {}", run.symbol(), workflow.name, run.display());
        Self { run, workflow, label }
    }
}
