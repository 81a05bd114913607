//! Pass/fail transition classification over heterogeneous result reports.
//!
//! A graphics test harness produces JSON result files in several unrelated
//! shapes; the shape is declared by the caller, not by the document. This
//! crate normalizes any of them into four transition buckets: tests that
//! were expected to pass and failed, expected to fail and passed, failed and
//! still fail, or passed and still pass.
//!
//! Classification never fails past its boundary: a malformed document is
//! reported as if the whole suite failed (`"All in <path>"`) so the caller's
//! reporting pipeline keeps going.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use gputriage_results::{Classification, ResultKind};
//!
//! let classification = Classification::from_file(
//!     Some(Path::new("results.json")),
//!     ResultKind::from_name("gtest_angle"),
//! );
//! for test in &classification.pass_fail {
//!     println!("regressed: {test}");
//! }
//! ```

pub mod classify;
pub mod error;
pub mod kind;

pub use classify::Classification;
pub use error::ResultError;
pub use kind::{ResultKind, ResultShape};
