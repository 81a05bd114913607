//! GPU test-expectation file maintenance.
//!
//! Expectation files are plain-text suppression lists consumed by a graphics
//! test harness. This crate rewrites them in place for a local Intel GPU
//! setup: it inserts a marker comment once, collapses vendor-variant tags
//! (`intel-0x9bc5`, `intel-gen-9`, ...) to the bare `intel` tag so that
//! per-device duplicates fold together, and appends a curated set of locally
//! maintained expectation lines.
//!
//! The rewrite is idempotent: once the marker comment is present, a second
//! run copies the file through untouched and skips the append step.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gputriage_expectations::{update, FsHost};
//!
//! update("trace_test", Path::new("/path/to/checkout"), &FsHost).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`target`]: the closed table of harness targets and their files
//! - [`local`]: locally curated expectation and suppression lines
//! - [`tags`]: vendor-variant tag canonicalization
//! - [`updater`]: the in-place file rewrite
//! - [`host`]: the filesystem/warning collaborator seam
//! - [`error`]: error types

pub mod error;
pub mod host;
pub mod local;
pub mod tags;
pub mod target;
pub mod updater;

pub use error::ExpectationError;
pub use host::{FsHost, Host};
pub use local::{local_expectations, report_suppressions};
pub use tags::{canonicalize_line, LineRewrite};
pub use target::Target;
pub use updater::update;
