//! Core credential-leak scanning engine for credsweep.
//!
//! This crate walks a source tree, applies an ordered set of detection
//! rules to every text line, suppresses known-benign shapes via an
//! allow-list, and aggregates the surviving matches into a pass/fail
//! report. It's designed to be embedded in CLIs and CI pipelines.
//!
//! # Main Types
//!
//! - [`Engine`] - Orchestrates the walk, per-file scans, and aggregation
//! - [`LineScanner`] - Applies suppression then detection rules to one line
//! - [`RuleSet`] - The fixed, ordered detection and suppression rules
//! - [`Report`] - Findings in discovery order plus the pass/fail verdict
//! - [`Config`] - Exclusion configuration loaded from `.credsweep.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`RuleError`] - Rule matcher compilation failures
//! - [`ScanError`] - Fatal directory-listing failures during a walk
//! - [`ConfigError`] - Configuration loading/parsing failures
//!
//! The CLI crate (`credsweep_cli`) uses `anyhow` for error propagation.
//!
//! Unreadable files are never fatal: a file that turns out to be a
//! directory is skipped silently, and any other read failure emits a
//! single [`tracing`] warning and is omitted from the report.

/// Exclusion configuration loaded from `.credsweep.toml`.
pub mod config;
/// The scan orchestrator tying the walker, file scanner, and report together.
pub mod engine;
/// Error types for rule compilation, tree walking, and configuration.
pub mod error;
/// Per-file reading and line dispatch.
pub mod file_scanner;
/// Types representing detected leaks.
pub mod finding;
/// Common re-exports for internal use.
pub mod prelude;
/// The aggregated scan result and its pass/fail verdict.
pub mod report;
/// Detection and suppression rule definitions and their compiled matchers.
pub mod rule;
/// The line-level scanner that enforces suppression-before-detection.
pub mod scanner;
/// Severity ranking for findings.
pub mod severity;
#[cfg(test)]
pub(crate) mod test_utils;
/// Directory traversal with name-based exclusions.
pub mod walker;

pub use config::{Config, ConfigError};
pub use engine::Engine;
pub use error::{CredsweepError, RuleError, ScanError};
pub use finding::Finding;
pub use report::Report;
pub use rule::{Rule, RuleSet, SuppressionRule};
pub use scanner::LineScanner;
pub use severity::Severity;
pub use walker::Exclusions;

/// Default filename for credsweep configuration.
pub const CONFIG_FILENAME: &str = ".credsweep.toml";
