//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for fetching WebGraph datasets.
///
/// Running without a subcommand is the same as `graphfetch run`.
#[derive(Parser)]
#[command(name = "graphfetch")]
#[command(about = "Fetch WebGraph datasets by running a download script once per dataset")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
