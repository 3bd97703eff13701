//! Shared testing utilities for workup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `workup` binary with the
    /// endpoint environment scrubbed.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("workup").expect("Failed to locate workup binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("OPENAI_API_KEY")
            .env_remove("API_BASE_URL")
            .env_remove("MODEL_NAME");
        cmd
    }

    /// Write a roster CSV into the work directory and return its path.
    pub fn write_roster(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write roster fixture");
        path
    }
}
