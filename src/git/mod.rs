//! git command execution layer
//!
//! This module handles running git in a workspace and capturing its output.

pub mod constants;
mod executor;

pub use executor::{CommandOutput, GitExecutor};

use std::io;
use thiserror::Error;

/// Errors that can occur while stamping a commit
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git command `{command}` failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
