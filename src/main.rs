//! commit-stamp
//!
//! Binary entry point: runs the timestamp step against the CI workspace.

use std::io;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing_subscriber::{EnvFilter, fmt};

use commit_stamp::cli::Cli;
use commit_stamp::step::{BuildContext, DISPLAY_NAME, StepRegistry};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let registry = StepRegistry::with_builtin(cli.step_config());
    let step = registry
        .find(DISPLAY_NAME)
        .ok_or_else(|| eyre!("step `{DISPLAY_NAME}` is not registered"))?;

    let ctx = BuildContext::new(cli.workspace);
    let ran = step.perform(&ctx, &mut io::stdout().lock())?;

    if !ran {
        std::process::exit(1);
    }
    Ok(())
}
