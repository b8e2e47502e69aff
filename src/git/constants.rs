//! git-specific constants
//!
//! Command names and flags used by the executor.

/// Default git binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const COMMIT: &str = "commit";
}

/// git command flags
pub mod flags {
    /// Limit `git log` to the most recent commit
    pub const LAST_ONE: &str = "-1";
    /// Raw body format (subject and body, unwrapped)
    pub const RAW_BODY: &str = "--pretty=%B";
    /// Replace the tip commit
    pub const AMEND: &str = "--amend";
    /// Commit message follows as the next argument
    pub const MESSAGE: &str = "-m";
}
