//! Console rendering of batch progress.

use std::io::{self, Write};

use graphfetch_core::ports::BatchEventEmitter;
use graphfetch_core::{BatchEvent, BatchSummary, TaskReport};
use tracing::{debug, warn};

/// How batch progress is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One line per dataset plus the final failure list.
    #[default]
    Text,
    /// Nothing while running; the caller prints the summary as JSON.
    Json,
}

/// Line printed when a task finishes.
pub fn task_line(report: &TaskReport) -> String {
    match report.outcome.diagnostic() {
        None => format!("Successfully processed {}", report.task),
        Some(diagnostic) => format!("Error running script for {}: {diagnostic}", report.task),
    }
}

/// Final line listing every failed dataset, e.g. `Failed datasets: ["enron"]`.
pub fn failures_line(summary: &BatchSummary) -> String {
    format!("Failed datasets: {}", summary.failures)
}

/// Render an event for text mode. Returns `None` for events with no console line.
pub fn format_event(event: &BatchEvent) -> Option<String> {
    match event {
        BatchEvent::TaskFinished(report) => Some(task_line(report)),
        BatchEvent::BatchFinished(summary) => Some(failures_line(summary)),
        BatchEvent::BatchStarted { .. } | BatchEvent::TaskStarted { .. } => None,
    }
}

/// Write one line to stdout.
///
/// A closed or broken stdout is logged and reported as `false`; it never
/// panics, so a reader going away cannot stop a batch in the middle.
pub fn print_line(line: &str) -> bool {
    write_line(&mut io::stdout().lock(), line)
}

fn write_line(out: &mut impl Write, line: &str) -> bool {
    match writeln!(out, "{line}").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to write to stdout: {e}");
            false
        }
    }
}

/// Emitter that prints batch progress to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmitter {
    mode: OutputMode,
}

impl ConsoleEmitter {
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl BatchEventEmitter for ConsoleEmitter {
    fn emit(&self, event: BatchEvent) {
        debug!(event = event.name(), "Batch event");
        if self.mode == OutputMode::Json {
            return;
        }
        if let Some(line) = format_event(&event) {
            print_line(&line);
        }
    }
}
