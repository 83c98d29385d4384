//! Types representing detected leaks.

use std::fmt;
use std::path::Path;

use crate::severity::Severity;

/// A single detected potential hardcoded credential.
///
/// Findings are created during scanning, never mutated, and live only
/// until the report is consumed; nothing is persisted between runs. The
/// matched substring is stored verbatim as it appears in the file.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Path to the file where the match was found.
    pub path: Box<Path>,
    /// 1-indexed line number of the match.
    pub line: u32,
    /// The matched substring, verbatim.
    pub matched_text: Box<str>,
    /// Severity inherited from the matching rule.
    pub severity: Severity,
    /// The source line, trimmed, for display.
    pub line_content: Box<str>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.path.display(),
            self.line,
            self.matched_text,
            self.severity,
        )
    }
}
