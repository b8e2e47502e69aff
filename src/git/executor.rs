//! git command executor
//!
//! Handles running git commands in a workspace and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use super::GitError;
use super::constants::{commands, flags};
use crate::config::{ExitStatusPolicy, StepConfig};
use crate::message;

/// Captured result of one git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, decoded as UTF-8 (lossy)
    pub stdout: String,
    /// Standard error, decoded as UTF-8 (lossy)
    pub stderr: String,
    /// Exit code (None when terminated by a signal)
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Executor for git commands rooted at one workspace
#[derive(Debug, Clone)]
pub struct GitExecutor {
    repo_path: PathBuf,
    binary: String,
    policy: ExitStatusPolicy,
}

impl GitExecutor {
    /// Create an executor for a workspace using the default configuration
    pub fn with_repo_path(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, &StepConfig::default())
    }

    /// Create an executor for a workspace using the given configuration
    pub fn with_config(path: impl Into<PathBuf>, config: &StepConfig) -> Self {
        Self {
            repo_path: path.into(),
            binary: config.git_binary.clone(),
            policy: config.exit_status,
        }
    }

    /// Override the git binary
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Path this executor runs in
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Exit status policy applied to every command
    pub fn policy(&self) -> ExitStatusPolicy {
        self.policy
    }

    /// Run a git command with the workspace as working directory
    ///
    /// Arguments are passed verbatim; no shell is involved.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput, GitError> {
        debug!(binary = %self.binary, ?args, cwd = %self.repo_path.display(), "running git");

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| {
                // A missing cwd also reports NotFound
                if e.kind() == std::io::ErrorKind::NotFound && self.repo_path.is_dir() {
                    GitError::GitNotFound
                } else {
                    GitError::Io(e)
                }
            })?;

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        if result.success() {
            return Ok(result);
        }

        let exit_code = result.exit_code.unwrap_or(-1);
        match self.policy {
            ExitStatusPolicy::Strict => Err(GitError::CommandFailed {
                command: args.join(" "),
                exit_code,
                stderr: result.stderr.trim().to_string(),
            }),
            ExitStatusPolicy::Lenient => {
                warn!(
                    exit_code,
                    stderr = %result.stderr.trim(),
                    "git {} exited unsuccessfully; ignoring",
                    args.join(" ")
                );
                Ok(result)
            }
        }
    }

    /// Run `git log -1 --pretty=%B` and return the trimmed message
    pub fn last_commit_message(&self) -> Result<String, GitError> {
        let output = self.run(&[commands::LOG, flags::LAST_ONE, flags::RAW_BODY])?;
        Ok(message::normalize_output(&output.stdout))
    }

    /// Run `git commit --amend -m <message>`
    pub fn amend_message(&self, message: &str) -> Result<CommandOutput, GitError> {
        self.run(&[commands::COMMIT, flags::AMEND, flags::MESSAGE, message])
    }
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::with_repo_path(".")
    }
}
