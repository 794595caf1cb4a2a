//! Task handler trait definition.
//!
//! This port defines the interface for running one task identifier through
//! the external handler. Implementations handle all process details
//! internally; the runner only sees the captured result.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::task::{TaskId, TaskOutcome};

/// Errors raised when the handler cannot be invoked at all.
///
/// A handler that runs and exits non-zero is NOT an error here; that is a
/// [`HandlerOutput`] with `success == false`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvocationError {
    #[error("handler not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied running handler: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to run handler {}: {message}", path.display())]
    Spawn { path: PathBuf, message: String },
}

/// Captured result of a handler process that ran to completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandlerOutput {
    /// Exit code, `None` when terminated by a signal.
    pub exit_code: Option<i32>,
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

impl HandlerOutput {
    /// Output of a handler that exited with status 0.
    #[must_use]
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a handler that exited with the given non-zero status.
    #[must_use]
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Classify this output as a task outcome.
    #[must_use]
    pub fn into_outcome(self) -> TaskOutcome {
        if self.success {
            TaskOutcome::Succeeded {
                stdout: self.stdout,
            }
        } else {
            TaskOutcome::HandlerFailed {
                exit_code: self.exit_code,
                stderr: self.stderr,
            }
        }
    }
}

impl From<InvocationError> for TaskOutcome {
    fn from(err: InvocationError) -> Self {
        Self::InvocationFault {
            message: err.to_string(),
        }
    }
}

/// Runs a single task identifier through the external handler.
///
/// Implementations must wait for the handler to finish before returning.
/// The runner relies on this to keep execution strictly sequential.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    /// Invoke the handler with `task` as its sole argument.
    async fn invoke(&self, task: &TaskId) -> Result<HandlerOutput, InvocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_classification() {
        assert!(HandlerOutput::succeeded("ok").into_outcome().is_success());

        let outcome = HandlerOutput::failed(2, "boom").into_outcome();
        assert_eq!(
            outcome,
            TaskOutcome::HandlerFailed {
                exit_code: Some(2),
                stderr: "boom".to_string(),
            }
        );
    }

    #[test]
    fn test_invocation_error_becomes_fault() {
        let err = InvocationError::NotFound {
            path: PathBuf::from("dataset/download_script.sh"),
        };
        let outcome = TaskOutcome::from(err);
        assert_eq!(
            outcome.diagnostic().as_deref(),
            Some("handler not found: dataset/download_script.sh")
        );
    }
}
