//! Update command implementation
//!
//! Applies the local Intel GPU update to a target's expectation files.

use anyhow::{Context, Result};
use colored::Colorize;
use gputriage_expectations::{update, FsHost, Target};
use std::path::Path;
use std::process::ExitCode;

/// Run the update command
///
/// # Arguments
/// * `target` - Harness target name
/// * `root` - Root directory of the harness checkout
///
/// # Returns
/// Exit code: 0 success (including no-op updates), 1 error
pub fn run(target: &str, root: &str) -> Result<ExitCode> {
    println!(
        "{} {} (root: {})",
        "Updating:".cyan().bold(),
        target,
        root
    );

    if Target::from_name(target).is_none() {
        println!(
            "{} no expectation files configured for '{}'",
            "note:".dimmed(),
            target
        );
        return Ok(ExitCode::SUCCESS);
    }

    update(target, Path::new(root), &FsHost)
        .with_context(|| format!("Failed to update expectations for target: {}", target))?;

    println!("{} expectation files updated", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}
