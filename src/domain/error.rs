use std::io;

use thiserror::Error;

/// Library-wide error type for run-delete operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid invocation detected before any network access.
    #[error("{0}")]
    Usage(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The repository to operate on could not be determined.
    #[error(
        "Could not determine the target repository. Pass --repo OWNER/REPO, set GH_REPO, or run inside a clone with an 'origin' remote."
    )]
    RepositoryDetectionFailed,

    /// An explicit run identifier does not correspond to any run.
    #[error("Could not find any workflow run with ID {0}")]
    RunNotFound(String),

    /// The interactive listing produced no candidates.
    #[error("found no completed runs to delete")]
    NoCompletedRuns,

    /// The remote service refused deletion because the run is still executing.
    #[error("Cannot delete a workflow run that hasn't completed")]
    RunNotDeletable,

    /// Non-success HTTP response surfaced as-is.
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Connection, TLS, or response decoding failure.
    #[error("API request failed: {0}")]
    Transport(String),

    /// The interactive chooser failed or was dismissed.
    #[error("{0}")]
    Prompt(String),

    /// Broken internal contract.
    #[error("Internal error: {0}")]
    Internal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// HTTP status carried by an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Usage(_)
            | AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Prompt(_) => io::ErrorKind::InvalidInput,
            AppError::RepositoryDetectionFailed
            | AppError::RunNotFound(_)
            | AppError::NoCompletedRuns => io::ErrorKind::NotFound,
            AppError::RunNotDeletable => io::ErrorKind::PermissionDenied,
            AppError::Api { .. } | AppError::Transport(_) | AppError::Internal(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
