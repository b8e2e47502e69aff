//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with a local identity configured.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };

        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Stamp Tester"]);
        repo.git(&["config", "user.email", "stamp@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Create a repository whose tip commit has the given message.
    pub fn with_commit(message: &str) -> Self {
        let repo = Self::new();
        repo.commit(message);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Record a commit with a verbatim message.
    ///
    /// Each commit appends its message to a tracked file so the tree
    /// changes. git refuses to amend a commit that would end up empty.
    pub fn commit(&self, message: &str) {
        let history = self.dir.path().join("HISTORY");
        let mut content = std::fs::read_to_string(&history).unwrap_or_default();
        content.push_str(message);
        content.push('\n');
        self.write_file("HISTORY", &content);

        self.git(&["add", "HISTORY"]);
        self.git(&[
            "commit",
            "--quiet",
            "--cleanup=verbatim",
            "-m",
            message,
        ]);
    }

    /// Message of the tip commit, trimmed.
    pub fn last_message(&self) -> String {
        self.git(&["log", "-1", "--pretty=%B"])
            .trim_matches(|c: char| c <= ' ')
            .to_string()
    }

    /// Hash of the tip commit.
    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("rev-list --count should print a number")
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
