//! Command-line interface definition using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ExitStatusPolicy, StepConfig};
use crate::git::constants::GIT_COMMAND;

/// Append a timestamp to the latest commit message in a build workspace
#[derive(Parser, Debug)]
#[command(name = "commit-stamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace containing the checked-out repository
    #[arg(env = "WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Report success even when git exits with a non-zero status
    #[arg(
        long,
        env = "COMMIT_STAMP_LENIENT",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub lenient: bool,

    /// git binary to run
    #[arg(long = "git", env = "COMMIT_STAMP_GIT", default_value = GIT_COMMAND)]
    pub git_binary: String,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn step_config(&self) -> StepConfig {
        StepConfig {
            git_binary: self.git_binary.clone(),
            exit_status: ExitStatusPolicy::from_lenient(self.lenient),
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
