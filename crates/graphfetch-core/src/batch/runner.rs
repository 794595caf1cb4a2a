//! The batch runner loop.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::summary::{BatchSummary, FailureList};
use crate::events::BatchEvent;
use crate::ports::{BatchEventEmitter, NoopBatchEmitter, TaskHandler};
use crate::task::{TaskId, TaskOutcome, TaskReport};

/// Drives an ordered list of tasks through a [`TaskHandler`], one at a time.
///
/// A failing task never stops the batch: handler failures and invocation
/// faults are both recorded in the [`FailureList`] and the next task is
/// started. Tasks are never retried.
pub struct BatchRunner {
    handler: Arc<dyn TaskHandler>,
    emitter: Arc<dyn BatchEventEmitter>,
}

impl BatchRunner {
    /// Create a runner that reports nowhere.
    pub fn new(handler: Arc<dyn TaskHandler>) -> Self {
        Self {
            handler,
            emitter: Arc::new(NoopBatchEmitter::new()),
        }
    }

    /// Route progress events to `emitter`.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn BatchEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Run every task in order and return the summary.
    ///
    /// Each handler invocation is awaited to completion before the next
    /// one begins.
    pub async fn run(&self, tasks: &[TaskId]) -> BatchSummary {
        let total = tasks.len();
        let started_at = Utc::now();
        let mut failures = FailureList::new();
        let mut reports = Vec::with_capacity(total);

        info!(total, "Starting batch");
        self.emitter.emit(BatchEvent::BatchStarted { total });

        for (index, task) in tasks.iter().enumerate() {
            let position = index + 1;
            self.emitter.emit(BatchEvent::TaskStarted {
                task: task.clone(),
                position,
                total,
            });

            let report = self.run_one(task, position).await;
            if !report.outcome.is_success() {
                failures.push(task.clone());
            }
            self.emitter.emit(BatchEvent::TaskFinished(report.clone()));
            reports.push(report);
        }

        let summary = BatchSummary {
            started_at,
            finished_at: Utc::now(),
            attempted: total,
            succeeded: total - failures.len(),
            failures,
            reports,
        };

        info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            failed = summary.failed(),
            "Batch finished"
        );
        self.emitter.emit(BatchEvent::BatchFinished(summary.clone()));

        summary
    }

    async fn run_one(&self, task: &TaskId, position: usize) -> TaskReport {
        debug!(
            %task,
            name = task.name(),
            size = task.size().unwrap_or("full"),
            position,
            "Invoking handler"
        );
        let started = Instant::now();

        let outcome = match self.handler.invoke(task).await {
            Ok(output) => {
                if !output.stdout.trim().is_empty() {
                    debug!(%task, stdout = %output.stdout.trim_end(), "Handler output");
                }
                output.into_outcome()
            }
            Err(err) => TaskOutcome::from(err),
        };

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if let Some(diagnostic) = outcome.diagnostic() {
            warn!(%task, %diagnostic, "Task failed");
        }

        TaskReport {
            task: task.clone(),
            position,
            outcome,
            duration_ms,
        }
    }
}
