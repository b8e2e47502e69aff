//! Explicit step registration

use super::{BuildStep, CommitTimestampAppender, ProjectKind};
use crate::config::StepConfig;

/// Steps known to a host, in registration order
#[derive(Default)]
pub struct StepRegistry {
    steps: Vec<Box<dyn BuildStep>>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every step this crate provides
    pub fn with_builtin(config: StepConfig) -> Self {
        let mut registry = Self::new();
        registry.register(CommitTimestampAppender::new(config));
        registry
    }

    pub fn register(&mut self, step: impl BuildStep + 'static) {
        self.steps.push(Box::new(step));
    }

    /// Look up a step by its display name
    pub fn find(&self, display_name: &str) -> Option<&dyn BuildStep> {
        self.steps
            .iter()
            .find(|s| s.display_name() == display_name)
            .map(|s| s.as_ref())
    }

    /// Steps that may be attached to the given project kind
    pub fn applicable(&self, kind: ProjectKind) -> impl Iterator<Item = &dyn BuildStep> {
        self.steps
            .iter()
            .filter(move |s| s.is_applicable(kind))
            .map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
