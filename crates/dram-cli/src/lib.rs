//! # dram-cli — CLI Tool for the Dram Reference Data
//!
//! Provides the `dram` command-line interface: the maintenance tools that
//! keep the curated whisky datasets consistent and turn them into the
//! published distribution formats.
//!
//! ## Subcommands
//!
//! - `dram validate` — Check every dataset against its JSON Schema.
//! - `dram names` — Distillery name hygiene: normalisation suggestions,
//!   duplicate detection, alias collisions.
//! - `dram export` — Render every dataset to `dist/{csv,json,xml}/`.
//!
//! Each subcommand is a batch run over the whole repository; none of them
//! takes a file argument. `validate` and `names` are read-only, `export`
//! writes only under `dist/`.
//!
//! ```bash
//! dram validate
//! dram names
//! dram export
//! dram -v export --data-root /path/to/checkout
//! ```

pub mod export;
pub mod names;
pub mod report;
pub mod validate;
