//! # graphfetch-cli
//!
//! Command-line adapter for graphfetch: argument parsing, bootstrap,
//! presentation and command handlers. The binary in `main.rs` only
//! dispatches.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use tempfile as _;

// Used by main.rs for the async runtime
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, RunArgs};
pub use parser::Cli;
