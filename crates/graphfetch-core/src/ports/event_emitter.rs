//! Event emitter trait for batch progress.
//!
//! Implementations handle presentation details (console, JSON, logs).

use crate::events::BatchEvent;

/// Trait for emitting batch progress events.
///
/// # Implementations
///
/// - `NoopBatchEmitter` - For tests and callers that only want the summary
/// - Adapter-specific implementations (console printer in the CLI)
pub trait BatchEventEmitter: Send + Sync {
    /// Emit a batch event. Called from the runner's single control flow.
    fn emit(&self, event: BatchEvent);
}

/// A no-op event emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBatchEmitter;

impl NoopBatchEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl BatchEventEmitter for NoopBatchEmitter {
    fn emit(&self, _event: BatchEvent) {
        // Intentionally do nothing
    }
}
