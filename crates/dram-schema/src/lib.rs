//! # dram-schema — Schema Validation for Reference Datasets
//!
//! This crate validates the curated JSON datasets against the JSON Schemas
//! (Draft 2020-12) shipped under `src/schema/`. Schemas reference each other
//! by absolute `$id` URI; all resolution happens against the local registry,
//! never over the network.
//!
//! ## Responsibilities
//!
//! - **Registry:** load every `*.schema.json` file, keyed by its mandatory
//!   `$id`, with a filename index for the dataset↔schema mapping table.
//! - **Validation:** compile a schema (resolving `$ref` through the
//!   registry) and collect *every* violation in a document, sorted by
//!   instance path, before reporting.
//!
//! ## Design
//!
//! One registry instance serves a whole validation run. Validators are built
//! per dataset; with seven small schemas the compile cost is noise, and the
//! single-pass batch shape keeps the failure report deterministic.

pub mod error;
pub mod registry;
pub mod validate;

pub use error::{SchemaError, Violation};
pub use registry::SchemaRegistry;
