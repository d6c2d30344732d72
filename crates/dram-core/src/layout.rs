//! # Repository Layout
//!
//! Where things live inside a Dram data repository and how the tools find the
//! repository root. All paths are derived from a single root directory:
//!
//! ```text
//! <root>/
//!   src/reference/   curated datasets (*.json)
//!   src/schema/      JSON Schemas (*.schema.json)
//!   dist/csv/        generated CSV exports
//!   dist/json/       generated JSON exports
//!   dist/xml/        generated XML exports
//! ```
//!
//! The root is discovered by walking upward from the working directory until
//! a directory containing `src/reference` is found, so the tools can run from
//! anywhere inside a checkout.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::DramError;

/// Pairs each reference dataset file with the schema that governs it.
///
/// The pairing is maintained by hand: dataset stems use underscores while the
/// matching schema files use hyphens, so a derived mapping would be wrong for
/// most rows. Adding a dataset means adding a row here.
pub const SCHEMA_MAPPINGS: [(&str, &str); 7] = [
    ("regions.json", "regions.schema.json"),
    ("distilleries.json", "distilleries.schema.json"),
    ("cask_types.json", "cask-types.schema.json"),
    ("wood_types.json", "wood-types.schema.json"),
    ("predecessors.json", "predecessors.schema.json"),
    ("fill_types.json", "fill-types.schema.json"),
    ("spirit_types.json", "spirit-types.schema.json"),
];

/// Resolved repository layout. Cheap to clone, performs no I/O on
/// construction.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    /// Uses `root` as the repository root without inspecting it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks upward from `start` looking for a directory that contains
    /// `src/reference`. Returns `None` when the filesystem root is reached
    /// without a match.
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            if dir.join("src").join("reference").is_dir() {
                return Some(Self { root: dir });
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// The repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the curated datasets.
    pub fn reference_dir(&self) -> PathBuf {
        self.root.join("src").join("reference")
    }

    /// Directory holding the JSON Schemas.
    pub fn schema_dir(&self) -> PathBuf {
        self.root.join("src").join("schema")
    }

    /// Output directory for CSV exports.
    pub fn csv_dir(&self) -> PathBuf {
        self.root.join("dist").join("csv")
    }

    /// Output directory for JSON exports.
    pub fn json_dir(&self) -> PathBuf {
        self.root.join("dist").join("json")
    }

    /// Output directory for XML exports.
    pub fn xml_dir(&self) -> PathBuf {
        self.root.join("dist").join("xml")
    }

    /// Creates the three `dist/` output directories if absent.
    pub fn ensure_dist_dirs(&self) -> io::Result<()> {
        std::fs::create_dir_all(self.csv_dir())?;
        std::fs::create_dir_all(self.json_dir())?;
        std::fs::create_dir_all(self.xml_dir())?;
        Ok(())
    }

    /// Lists the dataset files under `src/reference`, sorted by file name.
    ///
    /// A missing reference directory lists as empty; only `*.json` files are
    /// returned.
    pub fn reference_files(&self) -> Result<Vec<PathBuf>, DramError> {
        let dir = self.reference_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Strips the root prefix for display; falls back to the full path when
    /// `path` lies outside the repository.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
