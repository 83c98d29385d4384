//! Test utilities for `credsweep_core` (compiled only during testing).

use std::path::Path;

use crate::finding::Finding;
use crate::scanner::LineScanner;
use crate::severity::Severity;

pub fn make_scanner() -> LineScanner {
    LineScanner::builtin().unwrap()
}

pub fn make_finding(matched_text: &str, severity: Severity) -> Finding {
    Finding {
        path: Path::new("test.txt").into(),
        line: 1,
        matched_text: matched_text.into(),
        severity,
        line_content: matched_text.into(),
    }
}
