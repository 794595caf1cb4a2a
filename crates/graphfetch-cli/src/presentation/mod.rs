//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod catalog;
pub mod console;

// Re-export commonly used items
pub use catalog::catalog_lines;
pub use console::{
    ConsoleEmitter, OutputMode, failures_line, format_event, print_line, task_line,
};
