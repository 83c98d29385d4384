//! JSON output formatter for scan results.

use std::io::Write;

use credsweep_core::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct JsonFinding {
    path: String,
    line: u32,
    severity: String,
    matched_text: String,
    line_content: String,
}

#[derive(Serialize)]
struct JsonReport {
    passed: bool,
    findings: Vec<JsonFinding>,
}

fn to_json_finding(f: &Finding) -> JsonFinding {
    JsonFinding {
        path: f.path.display().to_string(),
        line: f.line,
        severity: f.severity.to_string(),
        matched_text: f.matched_text.to_string(),
        line_content: f.line_content.to_string(),
    }
}

/// Serialises the report as a pretty-printed JSON object to the given writer.
pub fn write(report: &Report, writer: &mut dyn Write) -> anyhow::Result<()> {
    let payload = JsonReport {
        passed: report.passed(),
        findings: report.findings().iter().map(to_json_finding).collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &payload)?;
    writeln!(writer)?;
    Ok(())
}
