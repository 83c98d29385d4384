//! Line-level scanning: suppression before detection.

use std::path::Path;

use crate::error::RuleError;
use crate::finding::Finding;
use crate::rule::RuleSet;

/// Applies the rule set to one line at a time.
///
/// Every suppression rule is evaluated against the raw, untrimmed line
/// first; a single suppression match vetoes all detection rules for that
/// line. Otherwise every detection rule runs - a line may legitimately
/// trigger several rules, each contributing one finding anchored to the
/// rule's first match on the line.
pub struct LineScanner {
    rules: RuleSet,
}

impl std::fmt::Debug for LineScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineScanner")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl LineScanner {
    /// Creates a scanner over an already-compiled rule set.
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Creates a scanner over the built-in rule set.
    pub fn builtin() -> Result<Self, RuleError> {
        Ok(Self::new(RuleSet::builtin()?))
    }

    /// Returns the underlying rule set.
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scans a single raw line and returns its findings.
    #[must_use]
    pub fn scan_line(&self, raw_line: &str, line_number: u32, path: &Path) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.scan_line_into(raw_line, line_number, path, &mut findings);
        findings
    }

    /// Scans a single raw line, appending findings to an existing vector.
    ///
    /// This is what the file scanner uses to avoid re-allocating per line.
    pub fn scan_line_into(&self, raw_line: &str, line_number: u32, path: &Path, findings: &mut Vec<Finding>) {
        if self.rules.is_suppressed(raw_line) {
            return;
        }

        for rule in self.rules.rules() {
            let Some(matched) = rule.find_first(raw_line) else {
                continue;
            };

            findings.push(Finding {
                path: path.into(),
                line: line_number,
                matched_text: matched.into(),
                severity: rule.severity,
                line_content: raw_line.trim().into(),
            });
        }
    }
}
