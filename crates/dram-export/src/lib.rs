//! # dram-export — Distribution Builds
//!
//! Renders each reference dataset into the three published formats:
//!
//! - **CSV** (`dist/csv/`): one row per entry; fixed columns `id`, `label`,
//!   `lifecycle`, `aliases`, then the sorted union of every meta key in the
//!   dataset. Structured meta values flatten to JSON text so nothing is lost
//!   in a cell.
//! - **JSON** (`dist/json/`): the source entries pretty-printed verbatim,
//!   object key order intact.
//! - **XML** (`dist/xml/`): a fixed element skeleton per entry with meta keys
//!   as child elements, written as a single line after the declaration.
//!
//! ## Design
//!
//! Every renderer is a pure function of the loaded dataset: same input file,
//! same bytes out, byte for byte. Output directories are the caller's
//! problem ([`dram_core::DataLayout::ensure_dist_dirs`]); the renderers just
//! write files.

pub mod columns;
pub mod csv;
pub mod error;
pub mod json;
pub mod xml;

use std::path::PathBuf;

use dram_core::{DataLayout, ReferenceDataset};

pub use crate::columns::{meta_columns, FIXED_COLUMNS};
pub use crate::csv::write_csv;
pub use crate::error::ExportError;
pub use crate::json::write_json;
pub use crate::xml::write_xml;

/// Renders one dataset into all three formats.
///
/// Returns the written paths in render order (CSV, JSON, XML). Output
/// directories must already exist.
pub fn export_dataset(
    dataset: &ReferenceDataset,
    layout: &DataLayout,
) -> Result<Vec<PathBuf>, ExportError> {
    let csv_path = layout.csv_dir().join(format!("{}.csv", dataset.name()));
    write_csv(dataset, &csv_path)?;

    let json_path = layout.json_dir().join(format!("{}.json", dataset.name()));
    write_json(dataset, &json_path)?;

    let xml_path = layout.xml_dir().join(format!("{}.xml", dataset.name()));
    write_xml(dataset, &xml_path)?;

    Ok(vec![csv_path, json_path, xml_path])
}
