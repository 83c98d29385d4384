//! Rules command - lists the built-in detection and suppression rules.

use console::style;
use credsweep_core::prelude::*;

use crate::ui::{colors, indicators, print_command_header, severity_indicator, severity_style};

/// Lists the built-in rule set in evaluation order.
pub fn run(verbose: bool) -> super::Result {
    print_command_header("rules");

    let set = RuleSet::builtin()?;

    println!("{}", style("detection rules").bold());
    for rule in set.rules() {
        print_rule(rule, verbose);
    }

    println!();
    println!("{}", style("suppression rules").bold());
    println!(
        "  {}",
        colors::muted().apply_to("evaluated first; a match hides the whole line from detection")
    );
    for suppression in set.suppressions() {
        print_suppression(suppression, verbose);
    }

    Ok(())
}

fn print_rule(rule: &Rule, verbose: bool) {
    let sev_style = severity_style(rule.severity);

    println!();
    println!(
        "{} {} {} {}",
        severity_indicator(rule.severity),
        style(rule.name).bold(),
        colors::muted().apply_to("·"),
        sev_style.apply_to(rule.severity.to_string()),
    );
    println!("  {}", colors::secondary().apply_to(rule.description));

    if verbose {
        println!("  {}", colors::accent().apply_to(rule.id));
        println!(
            "  {} {}",
            colors::info().apply_to(indicators::INFO),
            colors::secondary().apply_to(rule.remediation)
        );
    }
}

fn print_suppression(suppression: &SuppressionRule, verbose: bool) {
    println!();
    println!("{} {}", colors::success().apply_to(indicators::SUCCESS), style(suppression.name).bold());
    println!("  {}", colors::secondary().apply_to(suppression.description));

    if verbose {
        println!("  {}", colors::accent().apply_to(suppression.id));
    }
}
