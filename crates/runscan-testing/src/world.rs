//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated capture and output directories
//! - Placing historical and live captures
//! - Executing CLI commands against that environment

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::CaptureBuilder;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use runscan_testing::{CaptureBuilder, TestWorld};
///
/// let world = TestWorld::new()
///     .with_historical("output_feb03.json", "Feb 03", &CaptureBuilder::new().attempt(30));
///
/// let result = world.run(&["process"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    input_dir: PathBuf,
    output_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join(".runscan");
        let input_dir = base_path.join("captures");
        let output_dir = base_path.join("site");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&input_dir).expect("Failed to create input dir");

        Self {
            temp_dir,
            data_dir,
            input_dir,
            output_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.runscan).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory the captures are placed in.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Directory `process` publishes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Place a historical capture document in the input directory.
    pub fn with_historical(self, file_name: &str, date: &str, capture: &CaptureBuilder) -> Self {
        let vod = format!("https://www.twitch.tv/videos/{}", date.replace(' ', "").to_lowercase());
        self.write_input(file_name, &capture.historical_json(date, &vod))
            .expect("Failed to write historical capture");
        self
    }

    /// Place a live capture stream in the input directory.
    pub fn with_live(self, token: u64, capture: &CaptureBuilder) -> Self {
        self.write_input(&format!("output_{}.json", token), &capture.live_stream())
            .expect("Failed to write live capture");
        self
    }

    /// Write arbitrary content into the input directory.
    pub fn write_input(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(file_name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Parse a file under the output directory as JSON.
    pub fn read_output_json(&self, relative: &str) -> Result<serde_json::Value> {
        let path = self.output_dir.join(relative);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("runscan")`).
    /// Commands run from the temp root with the data dir pinned.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUNSCAN_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Arguments pointing `process` at this world's directories.
    pub fn process_args(&self) -> Vec<String> {
        vec![
            "process".to_string(),
            "--input".to_string(),
            self.input_dir.display().to_string(),
            "--output".to_string(),
            self.output_dir.display().to_string(),
            "--year".to_string(),
            "2025".to_string(),
        ]
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (which cargo test does automatically for the CLI crate).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("runscan")
            .map_err(|e| anyhow::anyhow!("Failed to find runscan binary: {}", e))?;

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

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
