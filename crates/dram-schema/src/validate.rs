//! # Dataset Validation
//!
//! Runs a document against a registered schema and reports *all* violations
//! at once, so a maintainer fixes a broken dataset in one edit-run cycle
//! instead of one violation at a time.
//!
//! ## Design
//!
//! Violations are sorted by instance path before reporting. Paths are
//! compared segment-wise as text (`"10"` sorts before `"2"`), which is
//! stable across validator library versions even though it is not numeric
//! order; ties keep the validator's emission order.

use serde_json::Value;

use dram_core::ReferenceDataset;

use crate::error::{SchemaError, Violation};
use crate::registry::SchemaRegistry;

impl SchemaRegistry {
    /// Validates a JSON value against a schema named by file name or `$id`.
    ///
    /// Returns `Ok(())` when the value is valid, otherwise
    /// [`SchemaError::ValidationFailed`] carrying every violation, sorted by
    /// instance path.
    pub fn validate_value(&self, value: &Value, schema: &str) -> Result<(), SchemaError> {
        let (schema_id, schema_doc) = self.resolve(schema)?;

        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .with_retriever(self.retriever())
            .build(schema_doc)
            .map_err(|e| SchemaError::Compile {
                schema_id: schema_id.to_string(),
                reason: e.to_string(),
            })?;

        let mut collected: Vec<(Vec<String>, String)> = validator
            .iter_errors(value)
            .map(|err| {
                (
                    path_segments(&err.instance_path.to_string()),
                    err.to_string(),
                )
            })
            .collect();
        if collected.is_empty() {
            return Ok(());
        }
        // Stable sort: equal paths keep the validator's emission order.
        collected.sort_by(|a, b| a.0.cmp(&b.0));

        Err(SchemaError::ValidationFailed {
            schema_id: schema_id.to_string(),
            violations: collected
                .into_iter()
                .map(|(segments, message)| Violation {
                    path: segments.join("/"),
                    message,
                })
                .collect(),
        })
    }

    /// Validates a loaded dataset against a schema named by file name or
    /// `$id`.
    pub fn validate_dataset(
        &self,
        dataset: &ReferenceDataset,
        schema: &str,
    ) -> Result<(), SchemaError> {
        let document = Value::Array(dataset.raw().to_vec());
        self.validate_value(&document, schema)
    }
}

/// Splits a JSON Pointer into its segments; the root pointer has none.
fn path_segments(pointer: &str) -> Vec<String> {
    pointer.split('/').skip(1).map(|s| s.to_string()).collect()
}
