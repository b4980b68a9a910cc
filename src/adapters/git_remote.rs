//! Repository detection from the enclosing git clone.

use std::path::Path;

use git2::Repository;

use crate::domain::{AppError, RepoRef};

const ORIGIN: &str = "origin";

/// Read the `origin` remote of the repository enclosing `start` and parse it.
///
/// Returns `Ok(None)` when there is no enclosing repository, no `origin`, or the
/// remote does not point at GitHub.
pub fn origin_repository(start: &Path) -> Result<Option<RepoRef>, AppError> {
    let repository = match Repository::discover(start) {
        Ok(repository) => repository,
        Err(err) if err.code() == git2::ErrorCode::NotFound => return Ok(None),
        Err(err) => {
            return Err(AppError::config_error(format!("Failed to open git repository: {}", err)));
        }
    };

    let remote = match repository.find_remote(ORIGIN) {
        Ok(remote) => remote,
        Err(err) => {
            tracing::debug!(error = %err, "no origin remote");
            return Ok(None);
        }
    };

    Ok(remote.url().and_then(RepoRef::from_remote_url))
}
