//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory with its own config file location, so
//! tests never read the developer's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tempfile::TempDir;

use postview_types::Post;

use crate::fixtures::write_posts_file;

/// Isolated environment for running the `postview` binary.
///
/// # Example
/// ```no_run
/// use postview_testing::{FixtureServer, TestWorld};
///
/// let server = FixtureServer::json("[]").unwrap();
/// let world = TestWorld::new().with_url(server.url());
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    url: Option<String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");

        Self {
            temp_dir,
            config_path,
            url: None,
        }
    }

    /// Point every command at `url` via `--url`.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a posts file inside the world and return its path.
    pub fn write_posts(&self, name: &str, posts: &[Post]) -> Result<PathBuf> {
        write_posts_file(self.temp_dir.path(), name, posts)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        if let Some(url) = &self.url {
            cmd.arg("--url").arg(url);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("POSTVIEW_CONFIG");
        cmd.env_remove("RUST_LOG");

        cmd
    }

    /// Run the `postview` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("postview")
            .map_err(|e| anyhow::anyhow!("Failed to find postview binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI invocation
#[derive(Debug)]
pub struct CliResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
