//! # Schema Subsystem Errors
//!
//! Errors from registry loading, validator compilation, and document
//! validation, plus the [`Violation`] detail type that a failed validation
//! carries.

use thiserror::Error;

/// One schema violation inside a document.
///
/// `path` is the instance location as slash-joined segments (`"3/meta/abv"`;
/// empty for the document root), which is also the key violations are sorted
/// by before reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Slash-joined path segments to the violating value.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at '{}': {}", self.path, self.message)
    }
}

/// Errors returned by schema registry and validation operations.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read or parsed.
    #[error("failed to load schema {path}: {reason}")]
    Load {
        /// Path of the schema that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The schema file carries no string `$id`. Every schema must declare
    /// one; `$ref` resolution has nothing else to key on.
    #[error("schema {path} is missing its $id")]
    MissingId {
        /// Path of the offending schema file.
        path: String,
    },

    /// The schema could not be compiled into a validator.
    #[error("failed to compile schema {schema_id}: {reason}")]
    Compile {
        /// The schema `$id`.
        schema_id: String,
        /// Human-readable reason.
        reason: String,
    },

    /// No registered schema matches the requested filename or `$id`.
    #[error("schema not found in registry: {0}")]
    NotFound(String),

    /// The document failed validation.
    #[error("{} violation(s) against {schema_id}", .violations.len())]
    ValidationFailed {
        /// The schema that was violated.
        schema_id: String,
        /// Individual violations, sorted by instance path.
        violations: Vec<Violation>,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_quotes_the_path() {
        let v = Violation {
            path: "0/id".to_string(),
            message: "not a string".to_string(),
        };
        assert_eq!(format!("{v}"), "at '0/id': not a string");
    }

    #[test]
    fn root_violation_displays_an_empty_path() {
        let v = Violation {
            path: String::new(),
            message: "expected array".to_string(),
        };
        assert_eq!(format!("{v}"), "at '': expected array");
    }

    #[test]
    fn validation_failed_display_counts_violations() {
        let err = SchemaError::ValidationFailed {
            schema_id: "https://example.org/x.schema.json".to_string(),
            violations: vec![
                Violation {
                    path: "0".to_string(),
                    message: "bad".to_string(),
                },
                Violation {
                    path: "1".to_string(),
                    message: "worse".to_string(),
                },
            ],
        };
        let msg = format!("{err}");
        assert!(msg.contains("2 violation(s)"));
        assert!(msg.contains("x.schema.json"));
    }

    #[test]
    fn missing_id_display_names_the_file() {
        let err = SchemaError::MissingId {
            path: "src/schema/regions.schema.json".to_string(),
        };
        assert!(format!("{err}").contains("missing its $id"));
    }
}
