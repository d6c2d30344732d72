//! # Export Subcommand
//!
//! Renders every reference dataset into the three distribution formats
//! (CSV, pretty JSON, XML) under `dist/`. Output directories are created on
//! demand, datasets are processed in sorted filename order, and a repository
//! with no reference files is a successful no-op.

use anyhow::{Context, Result};
use clap::Args;

use dram_core::{DataLayout, ReferenceDataset};
use dram_export::export_dataset;

use crate::report;

/// Arguments for the `dram export` subcommand.
#[derive(Args, Debug, Default)]
pub struct ExportArgs {}

/// Execute the export subcommand.
///
/// Returns exit code 0; every failure mode (unreadable input, broken
/// dataset, filesystem trouble) is a hard error instead.
pub fn run_export(_args: &ExportArgs, layout: &DataLayout) -> Result<u8> {
    layout
        .ensure_dist_dirs()
        .context("failed to create dist directories")?;

    let files = layout
        .reference_files()
        .context("failed to list reference files")?;
    if files.is_empty() {
        println!("No reference JSON files found.");
        return Ok(0);
    }

    tracing::info!(datasets = files.len(), "exporting reference data");

    for path in &files {
        let dataset = ReferenceDataset::load(path)
            .with_context(|| format!("failed to load {}", layout.relative(path).display()))?;
        let written = export_dataset(&dataset, layout)
            .with_context(|| format!("failed to export dataset '{}'", dataset.name()))?;
        for artifact in written {
            report::success(format!("Wrote {}", layout.relative(&artifact).display()));
        }
    }

    Ok(0)
}
