//! The aggregated scan result and its pass/fail verdict.

use crate::finding::Finding;
use crate::severity::Severity;

/// The scan-scoped result returned to the caller.
///
/// Findings are kept in discovery order. The verdict is zero-tolerance:
/// any finding at any severity fails the scan, and [`Report::passed`] is
/// the sole source of truth for exit status. Severity buckets exist only
/// to order findings for human triage.
#[derive(Debug, Default)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Creates a report from findings in discovery order.
    #[must_use]
    pub const fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Returns all findings in discovery order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns `true` if the scan produced no findings.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the findings carrying the given severity, in discovery order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Consumes the report and returns the underlying findings.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_finding;

    #[test]
    fn empty_report_passes() {
        let report = Report::default();
        assert!(report.passed());
        assert!(report.findings().is_empty());
    }

    #[test]
    fn any_finding_fails_regardless_of_severity() {
        for severity in Severity::ALL {
            let report = Report::new(vec![make_finding("value", severity)]);
            assert!(!report.passed(), "{severity} finding should fail the scan");
        }
    }

    #[test]
    fn with_severity_filters_but_keeps_order() {
        let report = Report::new(vec![
            make_finding("first", Severity::High),
            make_finding("second", Severity::Critical),
            make_finding("third", Severity::High),
        ]);

        let high: Vec<_> = report.with_severity(Severity::High).map(|f| f.matched_text.as_ref()).collect();
        assert_eq!(high, ["first", "third"]);
    }

    #[test]
    fn into_findings_preserves_discovery_order() {
        let report = Report::new(vec![
            make_finding("a", Severity::Medium),
            make_finding("b", Severity::Critical),
        ]);

        let findings = report.into_findings();
        assert_eq!(findings[0].matched_text.as_ref(), "a");
        assert_eq!(findings[1].matched_text.as_ref(), "b");
    }
}
