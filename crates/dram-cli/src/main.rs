//! # dram CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; one subcommand per
//! maintenance task (validate, names, export).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dram_cli::export::{run_export, ExportArgs};
use dram_cli::names::{run_names, NamesArgs};
use dram_cli::report;
use dram_cli::validate::{run_validate, ValidateArgs};
use dram_core::DataLayout;

/// Dram — whisky reference data toolchain.
///
/// Maintains the curated whisky datasets: validates them against their JSON
/// Schemas, audits distillery display names, and renders the distribution
/// formats under `dist/`.
#[derive(Parser, Debug)]
#[command(name = "dram", version = "0.3.1", about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the data repository root (defaults to auto-discovery).
    #[arg(long, global = true, value_name = "DIR")]
    data_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every reference dataset against its JSON Schema.
    Validate(ValidateArgs),

    /// Audit distillery display names for normalisation drift and duplicates.
    Names(NamesArgs),

    /// Export all reference datasets to CSV, JSON, and XML under dist/.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("dram CLI v0.3.1 starting");

    // Resolve the data repository root: an explicit --data-root wins,
    // otherwise walk up from CWD looking for `src/reference`.
    let layout = match cli.data_root {
        Some(root) => DataLayout::new(root),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            DataLayout::discover_from(&cwd).unwrap_or_else(|| {
                tracing::warn!("Could not locate repository root; using current directory");
                DataLayout::new(cwd)
            })
        }
    };

    tracing::debug!(data_root = %layout.root().display(), "resolved repository root");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &layout),
        Commands::Names(args) => run_names(&args, &layout),
        Commands::Export(args) => run_export(&args, &layout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            report::failure(format!("{e:#}"));
            ExitCode::from(1)
        }
    }
}
