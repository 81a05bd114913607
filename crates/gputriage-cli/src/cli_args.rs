//! CLI argument definitions for the gputriage command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use gputriage_results::ResultKind;

/// gputriage - GPU test expectation maintenance and result triage
#[derive(Parser)]
#[command(name = "gputriage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Apply the local Intel GPU update to a target's expectation files
    Update {
        /// Harness target name (angle_end2end_tests, info_collection_tests,
        /// trace_test, webgpu_cts_tests)
        #[arg(short, long)]
        target: String,

        /// Root directory of the harness checkout
        #[arg(short, long)]
        root: String,
    },

    /// Classify a JSON result report into pass/fail transition buckets
    Classify {
        /// Path to the JSON result file
        #[arg(short, long)]
        result: String,

        /// Declared result kind
        #[arg(short, long, value_parser = clap::builder::PossibleValuesParser::new(ResultKind::NAMES.iter().copied()))]
        kind: String,

        /// Apply the report-only suppression list for this target
        /// (e.g. angle_white_box_tests)
        #[arg(long)]
        suppress: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
