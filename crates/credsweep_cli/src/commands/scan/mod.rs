//! Scan command - walks a tree and reports credential leaks.

mod output;

use std::time::Instant;

use anyhow::Context as _;
use credsweep_core::prelude::*;

use self::output::{OutputContext, ScanStats, write_output};
use crate::ui::{exit, print_command_header};
use crate::{CONFIG_FILENAME, OutputFormat, ScanArgs};

/// Executes the `credsweep scan` command.
pub fn run(args: &ScanArgs) -> super::Result {
    configure_thread_pool(args.concurrency)?;

    let show_header = args.output.is_none() && matches!(args.format, OutputFormat::Text);
    let start = Instant::now();

    if show_header {
        print_command_header("scan");
    }

    let config = load_config(args)?;
    let exclusions = build_exclusions(&config, args);
    let engine = Engine::with_builtin_rules(exclusions).context("compiling built-in rules")?;

    let report = engine
        .scan(&args.root)
        .with_context(|| format!("scanning {}", args.root.display()))?;

    let stats = ScanStats {
        elapsed: start.elapsed(),
    };

    let ctx = OutputContext {
        report: &report,
        rules: engine.scanner().rules(),
        stats,
    };

    write_output(args, &ctx)?;

    handle_exit_code(args, &report);

    Ok(())
}

fn load_config(args: &ScanArgs) -> super::Result<Config> {
    match args.config.as_deref() {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            Ok(Config::load(path)?)
        }
        None => Ok(Config::load(&args.root.join(CONFIG_FILENAME))?),
    }
}

fn build_exclusions(config: &Config, args: &ScanArgs) -> Exclusions {
    Exclusions::new(
        config
            .excluded_dir_names
            .iter()
            .chain(args.exclude_dirs.iter())
            .cloned(),
        config
            .excluded_file_names
            .iter()
            .chain(args.exclude_files.iter())
            .cloned(),
    )
}

fn handle_exit_code(args: &ScanArgs, report: &Report) {
    if args.exit_zero {
        return;
    }

    if !report.passed() {
        std::process::exit(exit::FINDINGS);
    }
}

/// Configures the global rayon thread pool with the requested number of
/// threads, if specified.
fn configure_thread_pool(concurrency: Option<usize>) -> super::Result {
    if let Some(n) = concurrency {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("failed to configure thread pool")?;
    }
    Ok(())
}
