//! Shared testing harness for `run-delete` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment outside any git repository.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `$HOME/.config/run-delete/config.toml`.
    pub(crate) fn write_config(&self, content: &str) {
        let dir = self.home().join(".config/run-delete");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Build a command for the compiled binary with a scrubbed environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("run-delete").expect("Failed to locate run-delete binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("GH_REPO")
            .env_remove("GH_TOKEN")
            .env_remove("GITHUB_TOKEN")
            .env_remove("GH_API_URL")
            .env_remove("RUN_DELETE_CONFIG")
            .env_remove("RUN_DELETE_LOG");
        cmd
    }

    /// Command pointed at a mock API server for `OWNER/REPO`.
    pub(crate) fn cli_against(&self, api_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GH_API_URL", api_url).args(["--repo", "OWNER/REPO"]);
        cmd
    }
}
