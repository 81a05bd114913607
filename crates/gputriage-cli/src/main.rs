//! gputriage CLI - maintain GPU test-expectation files and triage JSON
//! result reports.

use clap::Parser;
use std::process::ExitCode;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Update { target, root } => commands::update::run(&target, &root),
        Commands::Classify {
            result,
            kind,
            suppress,
            json,
        } => commands::classify::run(&result, &kind, suppress.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
