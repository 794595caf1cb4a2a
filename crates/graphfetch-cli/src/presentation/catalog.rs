//! Catalog listing format.

use graphfetch_core::{DatasetCatalog, DatasetEntry};

/// One listing line per dataset. Disabled entries only appear with `all`.
pub fn catalog_lines(catalog: &DatasetCatalog, all: bool) -> Vec<String> {
    catalog
        .entries()
        .iter()
        .filter(|entry| all || entry.enabled)
        .map(entry_line)
        .collect()
}

fn entry_line(entry: &DatasetEntry) -> String {
    if entry.enabled {
        entry.id.to_string()
    } else {
        format!("{} (disabled)", entry.id)
    }
}
