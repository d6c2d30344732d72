//! # Reference Datasets and the Entry Projection
//!
//! A reference dataset is a JSON file whose top-level value is an array of
//! entry objects. [`ReferenceDataset::load`] parses the file and keeps the
//! documents verbatim; [`ReferenceEntry`] is the typed, tolerant view used by
//! tabular exports and the name hygiene audit.
//!
//! ## Design
//!
//! The loader is strict about structure (the file must hold an array of
//! objects) and deliberately lax about fields: a numeric `id`, a missing
//! `label`, or a scalar `aliases` value all project cleanly, because entry
//! shape is the schema validator's concern and the exporter must not fail on
//! data the validator has not seen yet. The single exception is `meta`, which
//! must be an object or `null` — there is no sensible tabular reading of any
//! other shape.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DramError;

/// A reference dataset as read off disk.
///
/// Keeps the parsed entries exactly as they appeared in the file, including
/// object key order. The JSON export reserialises these values directly.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    name: String,
    raw: Vec<Value>,
}

impl ReferenceDataset {
    /// Reads and parses a dataset file.
    ///
    /// The dataset name is the file stem (`regions.json` → `regions`).
    pub fn load(path: &Path) -> Result<Self, DramError> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| DramError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(name, value, &path.display().to_string())
    }

    /// Builds a dataset from an already-parsed value.
    ///
    /// `origin` is only used in error messages and is typically a file path.
    pub fn from_value(
        name: impl Into<String>,
        value: Value,
        origin: &str,
    ) -> Result<Self, DramError> {
        match value {
            Value::Array(raw) => Ok(Self {
                name: name.into(),
                raw,
            }),
            _ => Err(DramError::NotAnArray {
                path: origin.to_string(),
            }),
        }
    }

    /// The dataset name (file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed entries, verbatim.
    pub fn raw(&self) -> &[Value] {
        &self.raw
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the dataset holds no entries.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Projects every entry into its typed view, in file order.
    pub fn entries(&self) -> Result<Vec<ReferenceEntry>, DramError> {
        self.raw
            .iter()
            .enumerate()
            .map(|(index, value)| ReferenceEntry::from_value(&self.name, index, value))
            .collect()
    }
}

/// Typed view of a single entry, used by tabular exports and hygiene checks.
///
/// Every field except `meta` tolerates any JSON shape: scalars are textified
/// via [`scalar_text`], absent fields default to empty. `meta` key order is
/// preserved from the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    /// Stable identifier, textified.
    pub id: String,
    /// Display name, textified.
    pub label: String,
    /// Lifecycle marker (e.g. `active`, `closed`), textified.
    pub lifecycle: String,
    /// Alternate names. A scalar `aliases` value projects as a single-element
    /// list; absent or `null` projects as empty.
    pub aliases: Vec<String>,
    /// Open-ended per-entry metadata, key order preserved.
    pub meta: Map<String, Value>,
}

impl ReferenceEntry {
    /// Projects one entry object. `dataset` and `index` feed error messages.
    pub fn from_value(dataset: &str, index: usize, value: &Value) -> Result<Self, DramError> {
        let obj = value
            .as_object()
            .ok_or_else(|| DramError::EntryNotAnObject {
                dataset: dataset.to_string(),
                index,
            })?;

        let meta = match obj.get("meta") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(m)) => m.clone(),
            Some(_) => {
                return Err(DramError::InvalidField {
                    dataset: dataset.to_string(),
                    index,
                    field: "meta".to_string(),
                    expected: "an object",
                })
            }
        };

        Ok(Self {
            id: obj.get("id").map(scalar_text).unwrap_or_default(),
            label: obj.get("label").map(scalar_text).unwrap_or_default(),
            lifecycle: obj.get("lifecycle").map(scalar_text).unwrap_or_default(),
            aliases: alias_list(obj.get("aliases")),
            meta,
        })
    }
}

pub(crate) fn alias_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(scalar_text).collect(),
        Some(other) => vec![scalar_text(other)],
    }
}

/// Flattens a JSON value to cell text.
///
/// Strings pass through unquoted, numbers and booleans render as their JSON
/// token, `null` becomes empty, and arrays or objects collapse to their
/// compact JSON form so no information is lost in a flat cell.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Serializing an in-memory Value cannot fail; the fallback keeps the
        // signature infallible.
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> ReferenceEntry {
        ReferenceEntry::from_value("test", 0, &value).unwrap()
    }

    #[test]
    fn load_reads_dataset_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.json");
        fs::write(
            &path,
            r#"[{"id": "speyside", "label": "Speyside", "lifecycle": "active"}]"#,
        )
        .unwrap();

        let dataset = ReferenceDataset::load(&path).unwrap();
        assert_eq!(dataset.name(), "regions");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.raw()[0]["id"], "speyside");
    }

    #[test]
    fn load_rejects_non_array_top_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"id": "x"}"#).unwrap();

        let err = ReferenceDataset::load(&path).unwrap_err();
        assert!(matches!(err, DramError::NotAnArray { .. }));
        assert!(format!("{err}").contains("broken.json"));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[{").unwrap();

        let err = ReferenceDataset::load(&path).unwrap_err();
        assert!(matches!(err, DramError::Parse { .. }));
        assert!(format!("{err}").contains("bad.json"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceDataset::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DramError::Io(_)));
    }

    #[test]
    fn entries_projects_in_file_order() {
        let dataset = ReferenceDataset::from_value(
            "d",
            json!([{"id": "a", "label": "A"}, {"id": "b", "label": "B"}]),
            "d.json",
        )
        .unwrap();
        let entries = dataset.entries().unwrap();
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[1].id, "b");
    }

    #[test]
    fn entries_rejects_non_object_entry() {
        let dataset =
            ReferenceDataset::from_value("d", json!([{"id": "a"}, 42]), "d.json").unwrap();
        let err = dataset.entries().unwrap_err();
        assert!(matches!(
            err,
            DramError::EntryNotAnObject { index: 1, .. }
        ));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let e = entry(json!({}));
        assert_eq!(e.id, "");
        assert_eq!(e.label, "");
        assert_eq!(e.lifecycle, "");
        assert!(e.aliases.is_empty());
        assert!(e.meta.is_empty());
    }

    #[test]
    fn numeric_id_is_textified() {
        let e = entry(json!({"id": 123, "label": "X"}));
        assert_eq!(e.id, "123");
    }

    #[test]
    fn scalar_aliases_value_becomes_single_element_list() {
        let e = entry(json!({"aliases": "Old Name"}));
        assert_eq!(e.aliases, vec!["Old Name".to_string()]);
    }

    #[test]
    fn null_aliases_projects_empty() {
        let e = entry(json!({"aliases": null}));
        assert!(e.aliases.is_empty());
    }

    #[test]
    fn non_string_alias_items_are_textified() {
        let e = entry(json!({"aliases": ["A", 7, true]}));
        assert_eq!(e.aliases, vec!["A", "7", "true"]);
    }

    #[test]
    fn meta_key_order_is_preserved() {
        let e = entry(json!({"meta": {"zeta": 1, "alpha": 2, "mid": 3}}));
        let keys: Vec<&str> = e.meta.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn non_object_meta_is_rejected() {
        let err = ReferenceEntry::from_value("d", 2, &json!({"meta": "nope"})).unwrap_err();
        assert!(matches!(
            err,
            DramError::InvalidField { index: 2, .. }
        ));
        assert!(format!("{err}").contains("'meta'"));
    }

    #[test]
    fn scalar_text_covers_every_shape() {
        assert_eq!(scalar_text(&json!(null)), "");
        assert_eq!(scalar_text(&json!("plain")), "plain");
        assert_eq!(scalar_text(&json!(40)), "40");
        assert_eq!(scalar_text(&json!(17.5)), "17.5");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&json!(false)), "false");
        assert_eq!(scalar_text(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(scalar_text(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn scalar_text_keeps_nested_key_order() {
        let value = json!({"second": 2, "first": 1});
        assert_eq!(scalar_text(&value), r#"{"second":2,"first":1}"#);
    }
}
