//! Port definitions (trait abstractions) for external systems.
//!
//! The core crate never spawns processes or writes to the terminal itself.
//! Adapters implement these traits and are wired together at the
//! composition root.

mod event_emitter;
mod task_handler;

pub use event_emitter::{BatchEventEmitter, NoopBatchEmitter};
pub use task_handler::{HandlerOutput, InvocationError, TaskHandler};
