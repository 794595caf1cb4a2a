//! Batch progress events.
//!
//! Emitted by [`crate::BatchRunner`] through a
//! [`BatchEventEmitter`](crate::ports::BatchEventEmitter). Adapters decide
//! how to present them (console lines, JSON, nothing at all).

use crate::batch::BatchSummary;
use crate::task::{TaskId, TaskReport};

/// Progress of a batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchEvent {
    /// A batch is about to start.
    BatchStarted {
        /// Number of tasks in the batch.
        total: usize,
    },
    /// The handler is about to be invoked for a task.
    TaskStarted {
        task: TaskId,
        /// 1-based position in the batch.
        position: usize,
        total: usize,
    },
    /// The handler returned (or could not be invoked) for a task.
    TaskFinished(TaskReport),
    /// Every task has been attempted.
    BatchFinished(BatchSummary),
}

impl BatchEvent {
    /// Short event name, used as a log field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BatchStarted { .. } => "batch_started",
            Self::TaskStarted { .. } => "task_started",
            Self::TaskFinished(_) => "task_finished",
            Self::BatchFinished(_) => "batch_finished",
        }
    }
}
