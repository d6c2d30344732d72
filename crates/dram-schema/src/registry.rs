//! # The Schema Registry
//!
//! Loads every `*.schema.json` file from a schema directory and indexes it
//! two ways: by its `$id` URI (the key `$ref` resolution uses) and by its
//! file name (the key the dataset↔schema mapping table uses).
//!
//! ## Design
//!
//! Files are read in sorted name order so registration — and any load
//! failure — is deterministic. A schema without a string `$id` is a fatal
//! load error: the registry has nothing else to key resolution on, and a
//! derived fallback would mask the curation mistake. Resolution never
//! touches the network; a `$ref` to a URI outside the registry fails the
//! compile.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::SchemaError;

/// The loaded schema corpus for one validation run.
pub struct SchemaRegistry {
    schema_dir: PathBuf,
    /// Schemas indexed by their `$id` URI.
    schemas: HashMap<String, Value>,
    /// Map from file name (e.g. `regions.schema.json`) to `$id` URI.
    filename_to_id: HashMap<String, String>,
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("schema_dir", &self.schema_dir)
            .field("schema_count", &self.schemas.len())
            .finish()
    }
}

impl SchemaRegistry {
    /// Loads all `*.schema.json` files from `schema_dir`, in sorted name
    /// order.
    ///
    /// A missing directory yields an empty registry; lookups against it fail
    /// with [`SchemaError::NotFound`] later, which keeps "no schemas yet"
    /// distinguishable from "schemas broken".
    ///
    /// # Errors
    ///
    /// [`SchemaError::Load`] when a file cannot be read or parsed, and
    /// [`SchemaError::MissingId`] when a schema declares no string `$id`.
    pub fn load(schema_dir: impl Into<PathBuf>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.into();
        let mut schemas = HashMap::new();
        let mut filename_to_id = HashMap::new();

        if !schema_dir.is_dir() {
            return Ok(Self {
                schema_dir,
                schemas,
                filename_to_id,
            });
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&schema_dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|f| f.to_str())
                    .map(|f| f.ends_with(".schema.json"))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        for path in paths {
            let content = std::fs::read_to_string(&path).map_err(|e| SchemaError::Load {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            let schema: Value = serde_json::from_str(&content).map_err(|e| SchemaError::Load {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

            let id = schema
                .get("$id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| SchemaError::MissingId {
                    path: path.display().to_string(),
                })?
                .to_string();

            if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
                filename_to_id.insert(filename.to_string(), id.clone());
            }
            schemas.insert(id, schema);
        }

        Ok(Self {
            schema_dir,
            schemas,
            filename_to_id,
        })
    }

    /// The directory this registry was loaded from.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// All registered `$id` URIs, sorted.
    pub fn schema_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Looks up a schema document by its `$id` URI.
    pub fn get(&self, schema_id: &str) -> Option<&Value> {
        self.schemas.get(schema_id)
    }

    /// Resolves a schema file name to its `$id` URI.
    pub fn id_for_filename(&self, filename: &str) -> Option<&str> {
        self.filename_to_id.get(filename).map(|s| s.as_str())
    }

    /// Resolves either a file name or a full `$id` to the schema document.
    pub(crate) fn resolve(&self, name: &str) -> Result<(&str, &Value), SchemaError> {
        let id = match self.filename_to_id.get(name) {
            Some(id) => id.as_str(),
            None if self.schemas.contains_key(name) => name,
            None => return Err(SchemaError::NotFound(name.to_string())),
        };
        // Both arms above checked membership.
        match self.schemas.get_key_value(id) {
            Some((id, schema)) => Ok((id.as_str(), schema)),
            None => Err(SchemaError::NotFound(name.to_string())),
        }
    }

    /// Builds a `$ref` retriever over the registered schemas.
    pub(crate) fn retriever(&self) -> LocalSchemaRetriever {
        LocalSchemaRetriever {
            schemas: self.schemas.clone(),
        }
    }
}

/// Resolves `$ref` URIs by looking up pre-loaded schemas.
///
/// Strict by construction: a URI that is not in the registry is an error,
/// never a network fetch.
pub(crate) struct LocalSchemaRetriever {
    schemas: HashMap<String, Value>,
}

impl jsonschema::Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        self.schemas
            .get(uri_str)
            .cloned()
            .ok_or_else(|| format!("schema not found for URI: {uri_str}").into())
    }
}
