//! Per-task outcome types.

use serde::{Deserialize, Serialize};

use super::TaskId;

/// Result of running one task through its handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskOutcome {
    /// The handler exited with status 0.
    Succeeded {
        /// Captured standard output.
        stdout: String,
    },
    /// The handler ran and exited with a non-zero status.
    HandlerFailed {
        /// Exit code, `None` when the process was terminated by a signal.
        exit_code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
    /// The handler could not be invoked at all.
    InvocationFault {
        /// Description of why the invocation failed.
        message: String,
    },
}

impl TaskOutcome {
    /// Whether the task completed successfully.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Operator-facing diagnostic text for a failed task.
    ///
    /// Returns `None` for successful tasks. For handler failures this is the
    /// trimmed stderr, or the exit status when stderr was empty.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Succeeded { .. } => None,
            Self::HandlerFailed { exit_code, stderr } => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    Some(match exit_code {
                        Some(code) => format!("exited with status {code}"),
                        None => "terminated by signal".to_string(),
                    })
                } else {
                    Some(stderr.to_string())
                }
            }
            Self::InvocationFault { message } => Some(message.clone()),
        }
    }
}

/// Outcome of one task together with its position in the batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    /// The task that was run.
    pub task: TaskId,
    /// 1-based position in the batch.
    pub position: usize,
    /// How the task ended.
    pub outcome: TaskOutcome,
    /// Wall-clock time spent waiting on the handler, in milliseconds.
    pub duration_ms: u64,
}
