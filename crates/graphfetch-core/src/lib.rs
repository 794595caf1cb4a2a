//! # graphfetch-core
//!
//! Domain types and the batch runner for graphfetch.
//!
//! - `task` - Task identifiers and per-task outcomes
//! - `batch` - The sequential [`BatchRunner`] and its [`BatchSummary`]
//! - `catalog` - The built-in WebGraph dataset list
//! - `events` - Progress events emitted while a batch runs
//! - `ports` - Traits implemented by adapters (`TaskHandler`, `BatchEventEmitter`)
//!
//! This crate performs no process or terminal I/O.
#![deny(unused_crate_dependencies)]

pub mod batch;
pub mod catalog;
pub mod events;
pub mod ports;
pub mod task;

// Re-export commonly used types for convenience
pub use batch::{BatchRunner, BatchSummary, FailureList};
pub use catalog::{DatasetCatalog, DatasetEntry};
pub use events::BatchEvent;
pub use ports::{
    BatchEventEmitter, HandlerOutput, InvocationError, NoopBatchEmitter, TaskHandler,
};
pub use task::{TaskId, TaskIdError, TaskOutcome, TaskReport};
