//! # Column Derivation
//!
//! The CSV header is the four fixed columns followed by the union of every
//! meta key present anywhere in the dataset, sorted lexicographically. Rows
//! leave a column empty when their entry lacks that key, so ragged meta
//! never produces ragged CSV.

use std::collections::BTreeSet;

use dram_core::ReferenceEntry;

/// The leading columns of every CSV export, in order.
pub const FIXED_COLUMNS: [&str; 4] = ["id", "label", "lifecycle", "aliases"];

/// The sorted union of meta keys across all entries.
pub fn meta_columns(entries: &[ReferenceEntry]) -> Vec<String> {
    let mut keys = BTreeSet::new();
    for entry in entries {
        for key in entry.meta.keys() {
            keys.insert(key.clone());
        }
    }
    keys.into_iter().collect()
}
