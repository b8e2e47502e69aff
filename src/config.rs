//! Step configuration

use crate::git::constants::GIT_COMMAND;

/// How a non-zero git exit status is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatusPolicy {
    /// Fail the step with `GitError::CommandFailed`
    #[default]
    Strict,
    /// Ignore the exit status and report success (logged as a warning)
    Lenient,
}

impl ExitStatusPolicy {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient { Self::Lenient } else { Self::Strict }
    }
}

/// Settings for one step invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    /// git binary name or path
    pub git_binary: String,
    pub exit_status: ExitStatusPolicy,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            git_binary: GIT_COMMAND.to_string(),
            exit_status: ExitStatusPolicy::default(),
        }
    }
}
