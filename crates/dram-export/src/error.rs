//! # Export Errors
//!
//! Everything an export run can trip over: a dataset that fails to project,
//! a CSV encoding failure, JSON serialization, or plain I/O.

use thiserror::Error;

use dram_core::DramError;

/// Errors returned by the format renderers.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The dataset could not be loaded or projected.
    #[error("dataset error: {0}")]
    Dataset(#[from] DramError),

    /// CSV encoding or write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
