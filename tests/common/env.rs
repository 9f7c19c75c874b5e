//! Isolated test environment for running the locshot CLI.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a locshot CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory the CLI runs in.
///
/// Every path helper is relative to the temp root, so tests can use the
/// same relative `images/` and `screenshots/` layout the tool sees, which
/// keeps generated manifest paths deterministic.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get a path relative to the environment root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file relative to the environment root
    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&full, content).expect("failed to write file");
    }

    /// Read a file relative to the environment root
    pub fn read_file(&self, relative: &str) -> String {
        let full = self.path(relative);
        std::fs::read_to_string(&full)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    /// Create a directory (and parents) relative to the environment root
    pub fn create_dir(&self, relative: &str) {
        std::fs::create_dir_all(self.path(relative)).expect("failed to create directory");
    }

    /// Sorted recursive listing of the files under `relative`
    pub fn list_files(&self, relative: &str) -> Vec<String> {
        let root = self.path(relative);
        let mut listing = Vec::new();
        if !root.is_dir() {
            return listing;
        }
        let mut stack = vec![root.clone()];
        while let Some(dir) = stack.pop() {
            for entry in std::fs::read_dir(&dir).expect("failed to list directory") {
                let path = entry.expect("failed to read entry").path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    listing.push(
                        path.strip_prefix(&root)
                            .expect("entry under root")
                            .display()
                            .to_string(),
                    );
                }
            }
        }
        listing.sort();
        listing
    }

    /// Run the locshot CLI from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_locshot"))
            .current_dir(self.root.path())
            .args(args)
            .output()
            .expect("failed to execute locshot");
        self.output_to_result(output)
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
