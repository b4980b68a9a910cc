//! Resolved configuration for one `delete` invocation.

use crate::domain::{AppError, RepoRef};
use crate::ports::{ActionsClientFactory, RunChooser, Terminal};

/// How the run to delete is selected. Decided once, at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTarget {
    /// Explicit run identifier from the command line.
    Id(String),
    /// Pick from the list of completed runs.
    Prompt,
}

impl RunTarget {
    /// Choose the target from an optional identifier and the terminal's capabilities.
    pub fn from_args(run_id: Option<String>, can_prompt: bool) -> Result<Self, AppError> {
        match run_id {
            Some(id) if id.trim().is_empty() => {
                Err(AppError::Usage("run ID must not be empty".to_string()))
            }
            Some(id) => Ok(RunTarget::Id(id)),
            None if can_prompt => Ok(RunTarget::Prompt),
            None => Err(AppError::Usage(
                "run ID required when not running interactively".to_string(),
            )),
        }
    }
}

/// Dependencies and target bound for the command.
pub struct DeleteOptions<F, T, C>
where
    F: ActionsClientFactory,
    T: Terminal,
    C: RunChooser,
{
    target: RunTarget,
    repo: RepoRef,
    client_factory: F,
    terminal: T,
    chooser: C,
}

impl<F, T, C> DeleteOptions<F, T, C>
where
    F: ActionsClientFactory,
    T: Terminal,
    C: RunChooser,
{
    /// Fails with a usage error, before any network access, when no identifier is
    /// given and the terminal cannot prompt.
    pub fn new(
        run_id: Option<String>,
        repo: RepoRef,
        client_factory: F,
        terminal: T,
        chooser: C,
    ) -> Result<Self, AppError> {
        let target = RunTarget::from_args(run_id, terminal.can_prompt())?;
        Ok(Self::with_target(target, repo, client_factory, terminal, chooser))
    }

    /// Bind an already validated target.
    pub fn with_target(
        target: RunTarget,
        repo: RepoRef,
        client_factory: F,
        terminal: T,
        chooser: C,
    ) -> Self {
        Self { target, repo, client_factory, terminal, chooser }
    }

    pub fn target(&self) -> &RunTarget {
        &self.target
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    pub fn client_factory(&self) -> &F {
        &self.client_factory
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn chooser(&self) -> &C {
        &self.chooser
    }
}
