//! Failure list and batch summary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{TaskId, TaskReport};

/// Ordered, append-only list of tasks whose handler did not succeed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureList(Vec<TaskId>);

impl FailureList {
    /// Create an empty failure list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a failed task. Order of calls is preserved.
    pub fn push(&mut self, task: TaskId) {
        self.0.push(task);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskId> {
        self.0.iter()
    }
}

/// Renders as a literal list, e.g. `["eu-2005", "enron"]` or `[]`.
impl fmt::Display for FailureList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(TaskId::as_str))
            .finish()
    }
}

/// Summary of one batch run from first task to last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// When the first task was started.
    pub started_at: DateTime<Utc>,
    /// When the last task finished.
    pub finished_at: DateTime<Utc>,
    /// Number of tasks the handler was invoked for.
    pub attempted: usize,
    /// Number of tasks that succeeded.
    pub succeeded: usize,
    /// Failed tasks in batch order.
    pub failures: FailureList,
    /// Per-task reports in batch order.
    pub reports: Vec<TaskReport>,
}

impl BatchSummary {
    /// Number of tasks that failed, of either failure kind.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
