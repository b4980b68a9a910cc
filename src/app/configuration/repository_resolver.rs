//! Target repository resolution.

use std::path::Path;

use crate::adapters::git_remote::origin_repository;
use crate::domain::{AppError, RepoRef};

pub const REPO_ENV: &str = "GH_REPO";

/// Resolve the repository from, in order: the `--repo` flag, `GH_REPO`, and the
/// `origin` remote of the git repository enclosing `cwd`.
pub fn resolve_repository(
    flag: Option<&str>,
    env_value: Option<&str>,
    cwd: &Path,
) -> Result<RepoRef, AppError> {
    if let Some(value) = flag {
        return value.parse();
    }

    if let Some(value) = env_value.map(str::trim).filter(|value| !value.is_empty()) {
        return value.parse();
    }

    origin_repository(cwd)?.ok_or(AppError::RepositoryDetectionFailed)
}
