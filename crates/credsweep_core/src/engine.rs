//! The scan orchestrator.

use std::path::Path;

use rayon::prelude::*;

use crate::error::{RuleError, ScanError};
use crate::file_scanner::scan_file;
use crate::report::Report;
use crate::scanner::LineScanner;
use crate::walker::{self, Exclusions};

/// Orchestrates one scan: walk the tree, scan each file, aggregate.
///
/// The rule set and exclusions are constructed once at initialisation and
/// immutable for the engine's lifetime. Files are scanned in parallel;
/// per-file results are concatenated in walk order, so the set of
/// findings and the verdict are independent of scheduling, and repeated
/// scans of an unchanged tree produce identical reports.
pub struct Engine {
    scanner: LineScanner,
    exclusions: Exclusions,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("rules", &self.scanner.rules().len())
            .field("exclusions", &self.exclusions)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Creates an engine from a line scanner and exclusion set.
    #[must_use]
    pub const fn new(scanner: LineScanner, exclusions: Exclusions) -> Self {
        Self { scanner, exclusions }
    }

    /// Creates an engine over the built-in rule set.
    pub fn with_builtin_rules(exclusions: Exclusions) -> Result<Self, RuleError> {
        Ok(Self::new(LineScanner::builtin()?, exclusions))
    }

    /// Returns the line scanner used for each file.
    #[must_use]
    pub const fn scanner(&self) -> &LineScanner {
        &self.scanner
    }

    /// Scans the tree rooted at `root` and returns the report.
    ///
    /// A directory-listing failure aborts the whole scan with an error
    /// before any file is opened; unreadable files are skipped with a
    /// warning and do not affect the verdict.
    pub fn scan(&self, root: &Path) -> Result<Report, ScanError> {
        let files = walker::walk(root, &self.exclusions)?;

        let per_file: Vec<Vec<_>> = files.par_iter().map(|path| scan_file(path, &self.scanner)).collect();

        let findings = per_file.into_iter().flatten().collect();
        Ok(Report::new(findings))
    }
}
