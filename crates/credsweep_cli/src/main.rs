//! # Commands
//!
//! - `credsweep scan` - Scan a source tree for credential leaks
//! - `credsweep rules` - List the built-in detection and suppression rules

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;
pub use credsweep_core::CONFIG_FILENAME;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/credsweep/credsweep";

#[derive(Debug, Parser)]
#[command(
    name = "credsweep",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "r")]
    Rules(RulesArgs),
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `credsweep scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Root directory to scan.
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to `.credsweep.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory base names to prune, in addition to configuration.
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// File base names to skip, in addition to configuration.
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub exclude_files: Vec<String>,

    /// Always exit with code 0, even when leaks are found.
    #[arg(long)]
    pub exit_zero: bool,

    /// Number of parallel scanning threads.
    #[arg(long)]
    pub concurrency: Option<usize>,
}

/// Arguments for the `credsweep rules` command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Show rule identifiers and remediation guidance.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    init_tracing();

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

/// Installs the tracing subscriber that surfaces skipped-file warnings.
///
/// Defaults to `warn` so skipped files are reported without RUST_LOG set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Rules(args) => commands::rules::run(args.verbose),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} keeps hardcoded credentials out of your source tree.

  Walks a directory, applies an ordered rule set to every line,
  suppresses known-benign shapes, and fails the build on any
  remaining finding. Works offline. Zero configuration.",
        colors::accent().apply_to("credsweep").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    credsweep scan                   Scan current directory
    credsweep scan src/              Scan a specific tree
    credsweep scan . --format json   Output as JSON
    credsweep scan . --exclude-dir generated
    credsweep rules                  List detection rules
    credsweep rules --verbose        Include remediation guidance

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
