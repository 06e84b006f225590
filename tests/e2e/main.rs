use assert_cmd::Command;
use mend::config::RootConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test context that provides an isolated temporary directory.
/// Tests can run in parallel because each has its own temp directory.
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Returns the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run mend command in this temp directory
    pub fn run_mend(&self, args: &[&str]) -> CommandResult {
        let mut cmd = Command::cargo_bin("mend").expect("Failed to find mend binary");
        cmd.args(args);
        cmd.current_dir(self.path());

        let output = cmd.output().expect("Failed to execute mend command");

        CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }

    /// Get full path to a file in the temp directory
    pub fn file_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.path().join(path)
    }

    /// Read file from temp directory
    pub fn read_file(&self, path: impl AsRef<Path>) -> String {
        let full_path = self.file_path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Failed to read file: {}", full_path.display()))
    }

    /// Write file to temp directory (creates parent directories)
    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.file_path(&path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("Failed to create directory: {}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|_| panic!("Failed to write file: {}", full_path.display()));
    }

    /// Assert file exists
    pub fn assert_file_exists(&self, path: impl AsRef<Path>) {
        let full_path = self.file_path(&path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert file contains pattern
    pub fn assert_file_contains(&self, path: impl AsRef<Path>, pattern: &str) {
        let content = self.read_file(path);
        assert!(
            content.contains(pattern),
            "Expected file to contain '{}', but it didn't.\n\nContent:\n{}",
            pattern,
            content
        );
    }

    /// Load mend.toml config file and return the parsed RootConfig
    pub fn load_mend_config(&self) -> RootConfig {
        let path = self.file_path("mend.toml");
        RootConfig::load(&path).expect("Failed to load mend.toml config")
    }

    /// Point the built-in profile at an endpoint nothing listens on, so
    /// network-touching commands fail fast and deterministically.
    pub fn write_unreachable_config(&self) {
        self.write_file(
            "mend.toml",
            r#"
                [project]
                name = "e2e"

                [profiles.local]
                service = { url = "http://127.0.0.1:1/api" }
            "#,
        );
    }
}

pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

pub fn assert_success(result: &CommandResult) {
    assert!(
        result.success(),
        "Expected command to succeed but it failed.\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
        result.stdout,
        result.stderr
    );
}

pub fn assert_failure(result: &CommandResult) {
    assert!(
        !result.success(),
        "Expected command to fail but it succeeded.\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
        result.stdout,
        result.stderr
    );
}

pub fn assert_output_contains(result: &CommandResult, pattern: &str) {
    assert!(
        result.stdout.contains(pattern),
        "Expected stdout to contain '{}', but it didn't.\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
        pattern,
        result.stdout,
        result.stderr
    );
}

pub fn assert_stderr_contains(result: &CommandResult, pattern: &str) {
    assert!(
        result.stderr.contains(pattern),
        "Expected stderr to contain '{}', but it didn't.\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
        pattern,
        result.stdout,
        result.stderr
    );
}

pub mod happy_path;
pub mod smoke;
