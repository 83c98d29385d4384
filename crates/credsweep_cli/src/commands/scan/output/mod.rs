//! Output formatting for scan results.

mod json;
mod text;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use credsweep_core::prelude::*;

use crate::{OutputFormat, ScanArgs};

/// Aggregate statistics for a completed scan.
#[derive(Debug)]
pub struct ScanStats {
    /// Wall-clock time for the entire scan.
    pub elapsed: Duration,
}

/// Everything needed to render scan output in any format.
#[derive(Debug)]
pub struct OutputContext<'a> {
    /// The completed scan report.
    pub report: &'a Report,
    /// The rule set the scan ran with (for remediation lookup).
    pub rules: &'a RuleSet,
    /// Scan statistics for the summary line.
    pub stats: ScanStats,
}

/// Writes scan output to a file or stdout in the requested format.
pub fn write_output(args: &ScanArgs, ctx: &OutputContext) -> anyhow::Result<()> {
    match &args.output {
        Some(path) => write_to_file(path, args.format, ctx),
        None => write_to_stdout(args.format, ctx),
    }
}

fn write_to_file(path: &PathBuf, format: OutputFormat, ctx: &OutputContext) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Text => text::write(ctx, &mut writer, true),
        OutputFormat::Json => json::write(ctx.report, &mut writer),
    }
}

fn write_to_stdout(format: OutputFormat, ctx: &OutputContext) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    match format {
        OutputFormat::Text => text::write(ctx, &mut stdout, false),
        OutputFormat::Json => json::write(ctx.report, &mut stdout),
    }
}
