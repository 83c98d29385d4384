//! Text output formatting for scan results.

use std::io::Write;

use credsweep_core::prelude::*;

use super::OutputContext;
use crate::ui::{build_severity_summary, colors, format_duration, indicators, pluralise_word, severity_style};

/// Renders the report as styled, human-readable text to the given writer.
///
/// Findings are grouped by severity, most severe first, followed by a
/// severity summary, the PASSED/FAILED banner, and remediation guidance
/// when the scan failed.
pub fn write(ctx: &OutputContext, writer: &mut dyn Write, strip_colors: bool) -> anyhow::Result<()> {
    for severity in Severity::DISPLAY_ORDER {
        write_severity_group(ctx, severity, writer, strip_colors)?;
    }

    write_summary(ctx, writer, strip_colors)
}

fn write_severity_group(
    ctx: &OutputContext,
    severity: Severity,
    writer: &mut dyn Write,
    strip_colors: bool,
) -> anyhow::Result<()> {
    let findings: Vec<&Finding> = ctx.report.with_severity(severity).collect();
    if findings.is_empty() {
        return Ok(());
    }

    let sev_style = severity_style(severity);
    write_line(
        writer,
        format_args!(
            "{} {}",
            sev_style.apply_to(severity.to_string()),
            colors::muted().apply_to(format!("({})", findings.len()))
        ),
        strip_colors,
    )?;

    for finding in findings {
        write_finding(finding, writer, strip_colors)?;
    }

    writeln!(writer)?;
    Ok(())
}

fn write_finding(finding: &Finding, writer: &mut dyn Write, strip_colors: bool) -> anyhow::Result<()> {
    let location = format!("{}:{}", finding.path.display(), finding.line);

    write_line(
        writer,
        format_args!(
            "  {} {}",
            severity_style(finding.severity).apply_to(indicators::ERROR),
            colors::secondary().apply_to(&location)
        ),
        strip_colors,
    )?;
    write_line(
        writer,
        format_args!("      {}", colors::code().apply_to(finding.line_content.as_ref())),
        strip_colors,
    )?;
    write_line(
        writer,
        format_args!(
            "      {} {}",
            colors::muted().apply_to("match:"),
            colors::secondary().apply_to(finding.matched_text.as_ref())
        ),
        strip_colors,
    )
}

fn write_summary(ctx: &OutputContext, writer: &mut dyn Write, strip_colors: bool) -> anyhow::Result<()> {
    let elapsed = format_duration(ctx.stats.elapsed);

    if ctx.report.passed() {
        return write_line(
            writer,
            format_args!(
                "{} {} {}",
                colors::success().apply_to(indicators::SUCCESS),
                colors::success().bold().apply_to("PASSED"),
                colors::muted().apply_to(format!("- no credential leaks found ({elapsed})"))
            ),
            strip_colors,
        );
    }

    let count = ctx.report.findings().len();

    write_line(writer, format_args!("{}", build_severity_summary(ctx.report.findings())), strip_colors)?;
    write_line(
        writer,
        format_args!(
            "{} {} {}",
            colors::error().apply_to(indicators::ERROR),
            colors::error().bold().apply_to("FAILED"),
            colors::muted().apply_to(format!(
                "- {count} potential credential {} found ({elapsed})",
                pluralise_word(count, "leak", "leaks")
            ))
        ),
        strip_colors,
    )?;

    write_remediation(ctx, writer, strip_colors)
}

fn write_remediation(ctx: &OutputContext, writer: &mut dyn Write, strip_colors: bool) -> anyhow::Result<()> {
    writeln!(writer)?;
    write_line(
        writer,
        format_args!("{}", colors::secondary().bold().apply_to("Remediation")),
        strip_colors,
    )?;

    for severity in Severity::DISPLAY_ORDER {
        if ctx.report.with_severity(severity).next().is_none() {
            continue;
        }

        for rule in ctx.rules.rules().iter().filter(|r| r.severity == severity) {
            write_line(
                writer,
                format_args!(
                    "  {} {}",
                    colors::info().apply_to(indicators::INFO),
                    colors::secondary().apply_to(rule.remediation)
                ),
                strip_colors,
            )?;
        }
    }

    Ok(())
}

fn write_line(writer: &mut dyn Write, args: std::fmt::Arguments<'_>, strip_colors: bool) -> anyhow::Result<()> {
    let rendered = format!("{args}");
    if strip_colors {
        writeln!(writer, "{}", console::strip_ansi_codes(&rendered))?;
    } else {
        writeln!(writer, "{rendered}")?;
    }
    Ok(())
}
