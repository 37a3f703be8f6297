//! Test environment for isolated HydroScope runs.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a HydroScope CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
            .collect()
    }

    /// First event of the given kind
    pub fn event(&self, kind: &str) -> Value {
        self.events()
            .into_iter()
            .find(|e| e["event"] == kind)
            .unwrap_or_else(|| panic!("no '{kind}' event in:\n{}", self.stdout))
    }
}

/// Isolated working directory and HOME, so no real config leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write a file relative to the working directory
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_root.path().join(relative);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hydroscope"));
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("HYDROSCOPE_CROP")
            .env_remove("HYDROSCOPE_ETO")
            .env_remove("HYDROSCOPE_EFFICIENCY")
            .env_remove("HYDROSCOPE_VERBOSITY");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (k, v) in env {
            cmd.env(k, v);
        }
        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
