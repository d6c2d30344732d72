//! Integration test: validate every checked-in reference dataset against its
//! schema, exactly as `dram validate` does.
//!
//! Runs against the real `src/schema/` and `src/reference/` trees, so a
//! dataset edit that breaks its schema fails here before it reaches a
//! release.

use std::path::PathBuf;

use dram_core::{ReferenceDataset, SCHEMA_MAPPINGS};
use dram_schema::{SchemaError, SchemaRegistry};

/// Compute the repo root from the crate manifest directory.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/dram-schema -> crates -> repo root
    dir.pop();
    dir.pop();
    dir
}

fn registry() -> SchemaRegistry {
    SchemaRegistry::load(repo_root().join("src").join("schema"))
        .expect("schema registry failed to load")
}

#[test]
fn registry_loads_all_seven_schemas() {
    let registry = registry();
    assert_eq!(registry.schema_count(), 7);
    for id in registry.schema_ids() {
        assert!(
            id.starts_with("https://schemas.dramdata.org/dram/"),
            "unexpected schema id: {id}"
        );
    }
}

#[test]
fn every_mapping_row_resolves_to_a_registered_schema() {
    let registry = registry();
    for (reference, schema) in SCHEMA_MAPPINGS {
        assert!(
            registry.id_for_filename(schema).is_some(),
            "{reference} maps to unregistered schema {schema}"
        );
    }
}

#[test]
fn all_reference_datasets_validate() {
    let registry = registry();
    let reference_dir = repo_root().join("src").join("reference");

    for (reference, schema) in SCHEMA_MAPPINGS {
        let dataset = ReferenceDataset::load(&reference_dir.join(reference))
            .unwrap_or_else(|e| panic!("failed to load {reference}: {e}"));
        assert!(!dataset.is_empty(), "{reference} should not be empty");

        if let Err(e) = registry.validate_dataset(&dataset, schema) {
            match e {
                SchemaError::ValidationFailed { violations, .. } => {
                    let detail: Vec<String> =
                        violations.iter().map(|v| v.to_string()).collect();
                    panic!("{reference} failed validation:\n{}", detail.join("\n"));
                }
                other => panic!("{reference}: {other}"),
            }
        }
    }
}

#[test]
fn tampered_region_reference_is_caught() {
    let registry = registry();
    let path = repo_root()
        .join("src")
        .join("reference")
        .join("distilleries.json");
    let mut document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    // Point the first distillery at a region no schema knows.
    document[0]["meta"]["region"] = serde_json::json!("atlantis");

    let err = registry
        .validate_value(&document, "distilleries.schema.json")
        .unwrap_err();
    match err {
        SchemaError::ValidationFailed { violations, .. } => {
            assert!(
                violations.iter().any(|v| v.path == "0/meta/region"),
                "expected a violation at 0/meta/region, got: {violations:?}"
            );
        }
        other => panic!("expected ValidationFailed, got {other}"),
    }
}

#[test]
fn dataset_ids_are_unique_within_each_dataset() {
    // Not a schema rule (uniqueItems compares whole entries), but the
    // exporters key rows on `id`, so clashes here mean ambiguous output.
    let reference_dir = repo_root().join("src").join("reference");
    for (reference, _) in SCHEMA_MAPPINGS {
        let dataset = ReferenceDataset::load(&reference_dir.join(reference)).unwrap();
        let mut ids: Vec<String> = dataset
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate ids in {reference}");
    }
}
