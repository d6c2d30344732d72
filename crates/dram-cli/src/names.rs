//! # Names Subcommand
//!
//! Hygiene audit for distillery display names. Labels are pushed through the
//! canonical normalisation pipeline; any label that comes back changed earns
//! a suggestion, two entries landing on the same canonical form is a fatal
//! duplicate, and an alias shadowing another entry's canonical name is
//! warned about but tolerated.
//!
//! Findings are reported in the order the audit discovered them, so the
//! console output follows the document top to bottom.

use anyhow::{Context, Result};
use clap::Args;

use dram_core::{audit_labels, DataLayout, NameFinding, ReferenceDataset};

use crate::report;

/// Arguments for the `dram names` subcommand.
#[derive(Args, Debug, Default)]
pub struct NamesArgs {}

/// Execute the names subcommand.
///
/// Returns exit code 0 for a clean (or merely warned-about) dataset, 1 when
/// at least one duplicate canonical name was found.
pub fn run_names(_args: &NamesArgs, layout: &DataLayout) -> Result<u8> {
    let path = layout.reference_dir().join("distilleries.json");
    let dataset = ReferenceDataset::load(&path)
        .with_context(|| format!("failed to load {}", layout.relative(&path).display()))?;
    tracing::debug!(entries = dataset.len(), "auditing distillery names");

    let audit = audit_labels(&dataset).context("name audit aborted")?;

    for finding in audit.findings() {
        match finding {
            NameFinding::Suggestion { label, canonical } => {
                report::warning(format!("Suggest normalising '{label}' → '{canonical}'"));
            }
            NameFinding::Duplicate {
                canonical,
                first_id,
                second_id,
            } => {
                report::failure(format!("Duplicate detected: '{canonical}' appears in:"));
                report::detail(first_id);
                report::detail(second_id);
            }
            NameFinding::AliasCollision { alias, canonical } => {
                report::warning(format!(
                    "Alias collision: '{alias}' normalises to same as existing '{canonical}'"
                ));
            }
        }
    }

    if audit.has_duplicates() {
        Ok(1)
    } else {
        report::success("Distillery name hygiene looks good.");
        Ok(0)
    }
}
