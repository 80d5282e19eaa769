// Test utility module for codemend integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl BinaryResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A throwaway project tree the scripts run against.
pub struct Project {
    pub dir: tempfile::TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read fixture")
    }

    /// Run the codemend binary with `--root` pointed at this project.
    pub fn run(&self, args: &[&str]) -> BinaryResult {
        let mut cmd = codemend();
        cmd.args(args).arg("--root").arg(self.root());
        collect(cmd.output().expect("Failed to execute codemend"))
    }

    /// Run the codemend binary from `rel` inside this project, without `--root`.
    pub fn run_from(&self, rel: &str, args: &[&str]) -> BinaryResult {
        let mut cmd = codemend();
        cmd.args(args).current_dir(self.path(rel));
        collect(cmd.output().expect("Failed to execute codemend"))
    }
}

fn codemend() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codemend"));
    cmd.env_remove("RUST_LOG").env_remove("CODEMEND_ROOT");
    cmd
}

fn collect(output: Output) -> BinaryResult {
    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}
