//! # CSV Rendering
//!
//! One row per entry. Aliases join on `;`; structured meta values flatten to
//! their compact JSON text, which splits and parses back losslessly. Quoting
//! is the `csv` crate's default (only where needed).

use std::path::Path;

use ::csv::Writer;

use dram_core::{scalar_text, ReferenceDataset};

use crate::columns::{meta_columns, FIXED_COLUMNS};
use crate::error::ExportError;

/// Renders a dataset to `out_path` as CSV.
///
/// An empty dataset still writes its header row (all four fixed columns, no
/// meta columns).
pub fn write_csv(dataset: &ReferenceDataset, out_path: &Path) -> Result<(), ExportError> {
    let entries = dataset.entries()?;
    let meta_columns = meta_columns(&entries);

    let mut writer = Writer::from_path(out_path)?;

    let mut header: Vec<&str> = FIXED_COLUMNS.to_vec();
    header.extend(meta_columns.iter().map(|s| s.as_str()));
    writer.write_record(&header)?;

    for entry in &entries {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        record.push(entry.id.clone());
        record.push(entry.label.clone());
        record.push(entry.lifecycle.clone());
        record.push(entry.aliases.join(";"));
        for key in &meta_columns {
            record.push(entry.meta.get(key).map(scalar_text).unwrap_or_default());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: serde_json::Value) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let dataset = ReferenceDataset::from_value("test", value, "test.json").unwrap();
        write_csv(&dataset, &path).unwrap();
        (dir, path)
    }

    fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = ::csv::Reader::from_path(path).unwrap();
        let header = reader
            .headers()
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn header_is_fixed_columns_then_sorted_meta_union() {
        let (_dir, path) = render(json!([
            {"id": "a", "label": "A", "meta": {"region": "islay", "founded": 1816}},
            {"id": "b", "label": "B", "meta": {"owner": "Foo"}},
        ]));
        let (header, _) = read_rows(&path);
        assert_eq!(
            header,
            vec!["id", "label", "lifecycle", "aliases", "founded", "owner", "region"]
        );
    }

    #[test]
    fn aliases_join_on_semicolons() {
        let (_dir, path) = render(json!([
            {"id": "a", "label": "A", "aliases": ["Old A", "The A"]},
        ]));
        let (_, rows) = read_rows(&path);
        assert_eq!(rows[0][3], "Old A;The A");
        let parts: Vec<&str> = rows[0][3].split(';').collect();
        assert_eq!(parts, vec!["Old A", "The A"]);
    }

    #[test]
    fn missing_meta_keys_leave_empty_cells() {
        let (_dir, path) = render(json!([
            {"id": "a", "label": "A", "meta": {"founded": 1816}},
            {"id": "b", "label": "B", "meta": {"owner": "Foo"}},
        ]));
        let (header, rows) = read_rows(&path);
        assert_eq!(header[4], "founded");
        assert_eq!(header[5], "owner");
        assert_eq!(rows[0][4], "1816");
        assert_eq!(rows[0][5], "");
        assert_eq!(rows[1][4], "");
        assert_eq!(rows[1][5], "Foo");
    }

    #[test]
    fn structured_meta_values_round_trip_through_the_cell() {
        let original = json!({"brands": ["Springbank", "Longrow"], "coords": {"lat": 55.4, "lon": -5.6}});
        let (_dir, path) = render(json!([
            {"id": "a", "label": "A", "meta": original},
        ]));
        let (header, rows) = read_rows(&path);

        let brands_col = header.iter().position(|h| h == "brands").unwrap();
        let coords_col = header.iter().position(|h| h == "coords").unwrap();
        let brands: serde_json::Value = serde_json::from_str(&rows[0][brands_col]).unwrap();
        let coords: serde_json::Value = serde_json::from_str(&rows[0][coords_col]).unwrap();
        assert_eq!(brands, json!(["Springbank", "Longrow"]));
        assert_eq!(coords, json!({"lat": 55.4, "lon": -5.6}));
    }

    #[test]
    fn null_meta_values_render_empty() {
        let (_dir, path) = render(json!([
            {"id": "a", "label": "A", "meta": {"closed": null}},
        ]));
        let (_, rows) = read_rows(&path);
        assert_eq!(rows[0][4], "");
    }

    #[test]
    fn cells_with_commas_survive_quoting() {
        let (_dir, path) = render(json!([
            {"id": "a", "label": "Smith, Son & Co", "meta": {"owner": "A, B"}},
        ]));
        let (_, rows) = read_rows(&path);
        assert_eq!(rows[0][1], "Smith, Son & Co");
        assert_eq!(rows[0][4], "A, B");
    }

    #[test]
    fn empty_dataset_writes_header_only() {
        let (_dir, path) = render(json!([]));
        let (header, rows) = read_rows(&path);
        assert_eq!(header, vec!["id", "label", "lifecycle", "aliases"]);
        assert!(rows.is_empty());
    }
}
