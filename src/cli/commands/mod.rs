//! Command implementations for the sales analytics CLI
//!
//! Each command lives in its own module:
//! - `analyze`: the full ten-stage pipeline with enriched data and report output
//! - `validate`: read, parse and validate only, with a usability summary

pub mod analyze;
pub mod shared;
pub mod validate;

pub use shared::RunStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the selected subcommand
pub async fn run(args: Args) -> Result<RunStats> {
    match args.command {
        Some(Commands::Analyze(analyze_args)) => analyze::run_analyze(analyze_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Err(Error::configuration("no command given")),
    }
}
