//! Classify command implementation
//!
//! Parses a JSON result report and prints the four transition buckets.

use anyhow::{Context, Result};
use colored::Colorize;
use gputriage_expectations::report_suppressions;
use gputriage_results::{Classification, ResultKind};
use std::path::Path;
use std::process::ExitCode;

/// Run the classify command
///
/// # Arguments
/// * `result` - Path to the JSON result file
/// * `kind` - Declared result kind (validated by clap)
/// * `suppress` - Optional target whose report-only suppression list applies
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(result: &str, kind: &str, suppress: Option<&str>, json: bool) -> Result<ExitCode> {
    let mut classification =
        Classification::from_file(Some(Path::new(result)), ResultKind::from_name(kind));

    let suppressed = match suppress {
        Some(target) => classification.apply_suppressions(report_suppressions(target)),
        None => Vec::new(),
    };

    if json {
        let output = serde_json::to_string_pretty(&classification)
            .context("Failed to serialize classification")?;
        println!("{}", output);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} ({})", "Classified:".cyan().bold(), result, kind);
    print_bucket("pass -> fail", &classification.pass_fail, true);
    print_bucket("fail -> pass", &classification.fail_pass, false);
    print_bucket("fail -> fail", &classification.fail_fail, false);
    print_bucket("pass -> pass", &classification.pass_pass, false);
    if !suppressed.is_empty() {
        println!(
            "  {:<12} {}",
            "suppressed".dimmed(),
            suppressed.len().to_string().dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints one bucket: a count line, then the named entries. Placeholder
/// entries of the aggregate-counter kind carry no identifier and are listed
/// only through the count.
fn print_bucket(label: &str, entries: &[String], highlight_failures: bool) {
    if highlight_failures && !entries.is_empty() {
        println!(
            "  {:<12} {}",
            label,
            entries.len().to_string().red().bold()
        );
    } else {
        println!("  {:<12} {}", label, entries.len());
    }
    for entry in entries.iter().filter(|e| !e.is_empty()) {
        println!("    {}", entry);
    }
}
