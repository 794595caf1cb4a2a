//! Task domain types.
//!
//! A task is one dataset identifier run through the handler once.

mod id;
mod outcome;

pub use id::{SIZE_SEPARATOR, TaskId, TaskIdError};
pub use outcome::{TaskOutcome, TaskReport};
