//! Sequential batch execution.

mod runner;
mod summary;

pub use runner::BatchRunner;
pub use summary::{BatchSummary, FailureList};
