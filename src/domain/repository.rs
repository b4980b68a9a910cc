//! Repository reference (`OWNER/REPO`).

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Repository the command operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, AppError> {
        let owner = owner.into();
        let name = name.into();
        if !is_valid_segment(&owner) || !is_valid_segment(&name) {
            return Err(AppError::Usage(format!(
                "expected the \"OWNER/REPO\" format, got \"{}/{}\"",
                owner, name
            )));
        }
        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse a GitHub remote URL (https, ssh, or scp-like syntax).
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();
        let path = url
            .strip_prefix("git@github.com:")
            .or_else(|| url.strip_prefix("ssh://git@github.com/"))
            .or_else(|| url.strip_prefix("https://github.com/"))
            .or_else(|| url.strip_prefix("http://github.com/"))?;

        let path = path.trim_end_matches('/').trim_end_matches(".git");
        path.parse().ok()
    }
}

impl FromStr for RepoRef {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) => Self::new(owner, name),
            _ => Err(AppError::Usage(format!(
                "expected the \"OWNER/REPO\" format, got \"{}\"",
                value
            ))),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
