//! Build-step abstraction
//!
//! A host orchestrator registers steps explicitly with a [`StepRegistry`],
//! then calls [`BuildStep::perform`] after a build with a [`BuildContext`]
//! and its log stream.

mod registry;
mod timestamp;

pub use registry::StepRegistry;
pub use timestamp::{CommitTimestampAppender, DISPLAY_NAME, UPDATED_PREFIX, WORKSPACE_MISSING};

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::git::GitError;

/// Kind of project a step may be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Freestyle,
    Pipeline,
    MultiConfiguration,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 3] = [Self::Freestyle, Self::Pipeline, Self::MultiConfiguration];
}

/// Per-build values the host hands to a step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Checked-out workspace; None when the host has not provisioned one
    pub workspace: Option<PathBuf>,
}

impl BuildContext {
    pub fn new(workspace: Option<PathBuf>) -> Self {
        Self { workspace }
    }

    pub fn workspace(&self) -> Option<&Path> {
        self.workspace.as_deref()
    }
}

/// A unit of post-build work
///
/// `perform` returns `Ok(true)` when the step ran, `Ok(false)` when it was
/// skipped, and `Err` for failures the host should report as a broken build.
pub trait BuildStep {
    /// Name shown by the host
    fn display_name(&self) -> &str;

    /// Whether the step may be attached to projects of this kind
    fn is_applicable(&self, kind: ProjectKind) -> bool;

    fn perform(&self, ctx: &BuildContext, log: &mut dyn Write) -> Result<bool, GitError>;
}
