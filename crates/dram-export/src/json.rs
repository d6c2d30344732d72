//! # JSON Rendering
//!
//! The JSON export is a passthrough: the entries are reserialised exactly as
//! loaded, pretty-printed with two-space indentation. Object key order is
//! preserved (`serde_json` runs with `preserve_order`), so the export
//! parses back identical to the source file.

use std::path::Path;

use dram_core::ReferenceDataset;

use crate::error::ExportError;

/// Renders a dataset to `out_path` as pretty-printed JSON.
pub fn write_json(dataset: &ReferenceDataset, out_path: &Path) -> Result<(), ExportError> {
    let text = serde_json::to_string_pretty(dataset.raw())?;
    std::fs::write(out_path, text)?;
    Ok(())
}
