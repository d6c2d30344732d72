//! # Validate Subcommand
//!
//! Checks every reference dataset against its JSON Schema, driven by the
//! fixed mapping table in [`dram_core::SCHEMA_MAPPINGS`].
//!
//! A dataset with violations prints all of them (sorted by document path)
//! and fails the run; a missing dataset file only warns, so a half-populated
//! checkout can still validate what it has. Registry problems — unreadable
//! schemas, a schema without `$id`, a mapping row with no schema — abort
//! immediately.

use anyhow::{Context, Result};
use clap::Args;

use dram_core::{DataLayout, ReferenceDataset, SCHEMA_MAPPINGS};
use dram_schema::{SchemaError, SchemaRegistry};

use crate::report;

/// Arguments for the `dram validate` subcommand.
///
/// The run is always a full batch over the mapping table; there is nothing
/// to configure yet.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when every present dataset passes, 1 on the first
/// dataset with violations.
pub fn run_validate(_args: &ValidateArgs, layout: &DataLayout) -> Result<u8> {
    let registry =
        SchemaRegistry::load(layout.schema_dir()).context("failed to build schema registry")?;

    tracing::info!(
        schema_count = registry.schema_count(),
        "loaded schema registry"
    );

    for (ref_name, schema_name) in SCHEMA_MAPPINGS {
        let ref_path = layout.reference_dir().join(ref_name);
        if !ref_path.exists() {
            report::warning(format!("Skipping missing reference file {ref_name}"));
            continue;
        }

        let dataset = ReferenceDataset::load(&ref_path)
            .with_context(|| format!("failed to load {ref_name}"))?;
        tracing::debug!(dataset = ref_name, entries = dataset.len(), "loaded dataset");

        match registry.validate_dataset(&dataset, schema_name) {
            Ok(()) => {
                report::success(format!(
                    "{} is valid against {schema_name}",
                    layout.relative(&ref_path).display()
                ));
            }
            Err(SchemaError::ValidationFailed { violations, .. }) => {
                report::failure(format!(
                    "{} failed validation:",
                    layout.relative(&ref_path).display()
                ));
                for violation in &violations {
                    println!("  - {violation}");
                }
                return Ok(1);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to validate {ref_name}"));
            }
        }
    }

    Ok(0)
}
