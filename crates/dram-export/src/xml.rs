//! # XML Rendering
//!
//! Hand-rolled writer for the fixed document shape the XML export uses; a
//! generic XML library buys nothing here and costs control over the exact
//! bytes. The whole document lands on one line after the declaration:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <reference name="regions"><entry><id>speyside</id>...</entry></reference>
//! ```
//!
//! Every entry renders the same skeleton — `id`, `label`, `lifecycle`,
//! `aliases`, `meta`, always present, in that order. Elements with no
//! content self-close. Meta keys become child element names after
//! sanitisation: characters outside `[A-Za-z0-9_.-]` are replaced with `_`,
//! and a leading character that may not open an XML name gets a `_` prefix.

use std::path::Path;

use serde_json::Value;

use dram_core::{scalar_text, ReferenceDataset, ReferenceEntry};

use crate::error::ExportError;

/// Renders a dataset to `out_path` as XML.
pub fn write_xml(dataset: &ReferenceDataset, out_path: &Path) -> Result<(), ExportError> {
    let entries = dataset.entries()?;

    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    if entries.is_empty() {
        doc.push_str("<reference name=\"");
        doc.push_str(&escape_attr(dataset.name()));
        doc.push_str("\" />");
    } else {
        doc.push_str("<reference name=\"");
        doc.push_str(&escape_attr(dataset.name()));
        doc.push_str("\">");
        for entry in &entries {
            push_entry(&mut doc, entry);
        }
        doc.push_str("</reference>");
    }

    std::fs::write(out_path, doc)?;
    Ok(())
}

fn push_entry(doc: &mut String, entry: &ReferenceEntry) {
    doc.push_str("<entry>");
    push_element(doc, "id", &entry.id);
    push_element(doc, "label", &entry.label);
    push_element(doc, "lifecycle", &entry.lifecycle);

    if entry.aliases.is_empty() {
        doc.push_str("<aliases />");
    } else {
        doc.push_str("<aliases>");
        for alias in &entry.aliases {
            push_element(doc, "alias", alias);
        }
        doc.push_str("</aliases>");
    }

    // Null meta values are omitted entirely, so a meta object holding only
    // nulls self-closes like an absent one.
    let visible: Vec<(&String, &Value)> = entry
        .meta
        .iter()
        .filter(|(_, value)| !value.is_null())
        .collect();
    if visible.is_empty() {
        doc.push_str("<meta />");
    } else {
        doc.push_str("<meta>");
        for (key, value) in visible {
            push_element(doc, &element_name(key), &scalar_text(value));
        }
        doc.push_str("</meta>");
    }

    doc.push_str("</entry>");
}

/// Writes `<tag>text</tag>`, self-closing when the text is empty.
fn push_element(doc: &mut String, tag: &str, text: &str) {
    doc.push('<');
    doc.push_str(tag);
    if text.is_empty() {
        doc.push_str(" />");
    } else {
        doc.push('>');
        doc.push_str(&escape_text(text));
        doc.push_str("</");
        doc.push_str(tag);
        doc.push('>');
    }
}

/// Maps a meta key to a legal XML element name.
///
/// Keeps `[A-Za-z0-9_.-]`, replaces everything else with `_`, and prefixes
/// `_` when the result does not start with an ASCII letter or underscore.
/// Distinct keys can collide after sanitisation; both elements are still
/// written, as repeated sibling names are legal XML.
fn element_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let starts_legally = name
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if !starts_legally {
        name.insert(0, '_');
    }
    name
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
