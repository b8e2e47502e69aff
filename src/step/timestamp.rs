//! Append a timestamp to the latest commit message
//!
//! Reads the tip commit's message in the workspace, appends ` @<timestamp>`
//! and amends the commit with the result.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::{BuildContext, BuildStep, ProjectKind};
use crate::clock::{Clock, SystemClock};
use crate::config::StepConfig;
use crate::git::{GitError, GitExecutor};
use crate::message;

/// Name the step registers under
pub const DISPLAY_NAME: &str = "Append Timestamp to Git Commit";

/// Log line written when the host supplied no workspace
pub const WORKSPACE_MISSING: &str = "Workspace is null. Aborting.";

/// Prefix of the log line written after a successful amend
pub const UPDATED_PREFIX: &str = "Updated commit message: ";

/// Build step that stamps the tip commit with the current time
#[derive(Debug, Clone)]
pub struct CommitTimestampAppender<C = SystemClock> {
    config: StepConfig,
    clock: C,
}

impl CommitTimestampAppender {
    pub fn new(config: StepConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for CommitTimestampAppender {
    fn default() -> Self {
        Self::new(StepConfig::default())
    }
}

impl<C: Clock> CommitTimestampAppender<C> {
    /// Use a custom clock
    pub fn with_clock(config: StepConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Stamp the tip commit of `workspace`
    ///
    /// Returns `Ok(false)` without spawning anything when `workspace` is None.
    /// Writes exactly one line to `log` on either outcome.
    pub fn run<W>(&self, workspace: Option<&Path>, log: &mut W) -> Result<bool, GitError>
    where
        W: Write + ?Sized,
    {
        let Some(workspace) = workspace else {
            writeln!(log, "{WORKSPACE_MISSING}")?;
            return Ok(false);
        };

        let git = GitExecutor::with_config(workspace, &self.config);

        let original = git.last_commit_message()?;
        let timestamp = message::format_timestamp(&self.clock.now());
        let stamped = message::stamp(&original, &timestamp);

        git.amend_message(&stamped)?;
        info!(workspace = %workspace.display(), message = %stamped, "amended commit");

        writeln!(log, "{UPDATED_PREFIX}{stamped}")?;
        Ok(true)
    }
}

impl<C: Clock> BuildStep for CommitTimestampAppender<C> {
    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn is_applicable(&self, _kind: ProjectKind) -> bool {
        true
    }

    fn perform(&self, ctx: &BuildContext, log: &mut dyn Write) -> Result<bool, GitError> {
        self.run(ctx.workspace(), log)
    }
}
