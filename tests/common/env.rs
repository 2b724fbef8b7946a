//! Isolated environment for running the `pingone-sweep` binary.
//!
//! The child process gets an empty environment plus temp directories for
//! HOME, the user config dir, and the working directory, so neither a real
//! config file nor `PINGONE_*` variables leak into a test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Every stdout line that parses as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// The first JSON line whose `event` field equals `name`
    pub fn event(&self, name: &str) -> Option<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .find(|value| value["event"] == name)
    }
}

pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    vars: Vec<(String, String)>,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            vars: Vec::new(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pingone-sweep")),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    /// Write `pingone-sweep.toml` into the working directory.
    pub fn with_project_config(self, content: &str) -> Self {
        std::fs::write(self.work_path("pingone-sweep.toml"), content).unwrap();
        self
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.work_dir.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let home = self.home_dir.path();
        let mut command = Command::new(&self.bin);
        command
            .args(args)
            .current_dir(cwd)
            .env_clear()
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1");
        if let Some(path) = std::env::var_os("PATH") {
            command.env("PATH", path);
        }
        for (key, value) in &self.vars {
            command.env(key, value);
        }

        let output = command.output().expect("failed to run pingone-sweep");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
