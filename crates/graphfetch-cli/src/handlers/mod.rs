//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Take parsed CLI input
//! 2. Call into the composed `CliContext` or core types
//! 3. Format output for the terminal

pub mod list;
pub mod run;
