//! Error types for expectation-file updates.
//!
//! Missing paths and unknown targets are deliberately not errors: the updater
//! warns through the [`Host`](crate::host::Host) collaborator and returns
//! normally. Only genuine read/write failures surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for expectation-file operations.
#[derive(Debug, Error)]
pub enum ExpectationError {
    /// I/O error while reading a file or writing the rewritten copy.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rewritten temp file could not replace the original. The original
    /// file is left untouched.
    #[error("failed to replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
