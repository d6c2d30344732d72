//! # Error Hierarchy
//!
//! Structured error types shared by the Dram tooling, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Variants carry the dataset name, entry index, and field involved so that a
//! maintainer can open the offending JSON file and land on the broken entry
//! without re-running anything.

use thiserror::Error;

/// Top-level error type for dataset loading and name hygiene.
#[derive(Error, Debug)]
pub enum DramError {
    /// The file could not be parsed as JSON at all.
    #[error("{path}: invalid JSON: {reason}")]
    Parse {
        /// Path of the unreadable file, as given to the loader.
        path: String,
        /// Parser message, verbatim.
        reason: String,
    },

    /// The top-level JSON value is not an array.
    #[error("{path}: top-level value must be a JSON array")]
    NotAnArray {
        /// Path of the offending file.
        path: String,
    },

    /// An element of the top-level array is not an object.
    #[error("entry {index} in {dataset}: expected a JSON object")]
    EntryNotAnObject {
        /// Dataset name (file stem, e.g. `distilleries`).
        dataset: String,
        /// Zero-based position in the top-level array.
        index: usize,
    },

    /// A field required by the operation is absent from the entry.
    #[error("entry {index} in {dataset}: missing required field '{field}'")]
    MissingField {
        /// Dataset name.
        dataset: String,
        /// Zero-based position in the top-level array.
        index: usize,
        /// Name of the absent field.
        field: String,
    },

    /// A field is present but carries the wrong JSON type.
    #[error("entry {index} in {dataset}: field '{field}' must be {expected}")]
    InvalidField {
        /// Dataset name.
        dataset: String,
        /// Zero-based position in the top-level array.
        index: usize,
        /// Name of the mistyped field.
        field: String,
        /// What the operation needed, e.g. `a string`.
        expected: &'static str,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
