//! # Console Reporting
//!
//! The three glyph-prefixed line shapes every subcommand prints. Keeping
//! them in one place keeps the output greppable: `✅` success, `⚠️` warning,
//! `❌` failure.
//!
//! These lines are the tools' primary interface (CI logs and maintainers
//! both read them), so they go to stdout; diagnostics go through `tracing`
//! to stderr instead.

use std::fmt::Display;

/// Prints a success line: `✅ <message>`.
pub fn success(message: impl Display) {
    println!("✅ {message}");
}

/// Prints a warning line: `⚠️  <message>`.
///
/// Two spaces after the glyph; the emoji renders double-width in most
/// terminals and a single space makes the columns ragged.
pub fn warning(message: impl Display) {
    println!("⚠️  {message}");
}

/// Prints a failure line: `❌ <message>`.
pub fn failure(message: impl Display) {
    println!("❌ {message}");
}

/// Prints an indented detail line under a finding: `   - <message>`.
pub fn detail(message: impl Display) {
    println!("   - {message}");
}
