//! List command handler.

use graphfetch_core::DatasetCatalog;

use crate::presentation::{catalog_lines, print_line};

/// Print the built-in catalog, one dataset per line.
///
/// Stops quietly once stdout is closed (e.g. piped into `head`).
pub fn execute(all: bool) {
    for line in catalog_lines(&DatasetCatalog::builtin(), all) {
        if !print_line(&line) {
            break;
        }
    }
}
