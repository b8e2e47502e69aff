//! commit-stamp - append a timestamp to the latest git commit
//!
//! A post-build step for CI hosts. It reads the tip commit's message in the
//! build workspace, appends ` @yyyy-MM-dd HH:mm:ss` and amends the commit.
//!
//! This library provides:
//! - [`step`]: The build step, its host-facing trait and registry
//! - [`git`]: git command execution
//! - [`message`]: Message normalisation and stamping
//! - [`clock`]: Time sources
//! - [`config`]: Step configuration
//! - [`cli`]: Command-line arguments for the binary

pub mod cli;
pub mod clock;
pub mod config;
pub mod git;
pub mod message;
pub mod step;
