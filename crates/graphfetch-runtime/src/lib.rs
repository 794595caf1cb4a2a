//! Process runtime for graphfetch.
//!
//! Implements the core [`TaskHandler`](graphfetch_core::ports::TaskHandler)
//! port by spawning the external download script once per task.

mod resolve;
mod script_handler;

pub use resolve::resolve_handler;
pub use script_handler::ScriptHandler;
