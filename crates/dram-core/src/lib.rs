//! # dram-core — Foundational Types for the Dram Reference Data
//!
//! This crate defines the shared vocabulary of the Dram tooling: how a
//! reference dataset is read off disk, how its entries are projected into a
//! typed shape for tabular work, how distillery names are normalised for
//! hygiene checks, and where everything lives inside a data repository.
//!
//! ## Key Design Principles
//!
//! 1. **The JSON file is the source of truth.** A loaded dataset keeps the
//!    parsed documents verbatim ([`ReferenceDataset::raw`]); the typed
//!    [`ReferenceEntry`] view is a lossy projection layered on top, never a
//!    replacement. Exports that must reproduce the input byte-for-byte in
//!    structure work from the raw values.
//! 2. **Tolerant projection, strict structure.** Entries with missing or
//!    oddly-typed `id`/`label`/`aliases` fields still project into a
//!    [`ReferenceEntry`] (defaults apply); only structural breakage — a file
//!    that is not a JSON array, an entry that is not an object — is an error.
//!    Field-level strictness is the schema validator's job, not the loader's.
//! 3. **Deterministic everywhere.** Normalisation is a pure function,
//!    directory listings are sorted, and key order inside entries is
//!    preserved end to end. Running a tool twice over the same tree must
//!    produce identical output.
//!
//! ## Crate Policy
//!
//! `dram-core` performs no I/O beyond reading dataset files handed to it and
//! never writes to the repository. It has no knowledge of schemas, export
//! formats, or the CLI; those live in `dram-schema`, `dram-export`, and
//! `dram-cli`.

pub mod entry;
pub mod error;
pub mod layout;
pub mod normalise;

pub use entry::{scalar_text, ReferenceDataset, ReferenceEntry};
pub use error::DramError;
pub use layout::{DataLayout, SCHEMA_MAPPINGS};
pub use normalise::{audit_labels, normalise, NameAudit, NameFinding};
