//! Error types for result parsing.
//!
//! These never escape the crate boundary: the extraction strategies propagate
//! them with `?` and [`Classification::from_file`](crate::Classification::from_file)
//! collapses any of them into the synthetic all-failed record.

use thiserror::Error;

/// Error raised while extracting a classification from a result document.
#[derive(Debug, Error)]
pub enum ResultError {
    /// I/O error while reading the result file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A key the declared shape requires is absent.
    #[error("missing key: {0}")]
    MissingKey(&'static str),

    /// A value does not have the type the declared shape requires.
    #[error("unexpected shape at {0}")]
    UnexpectedShape(&'static str),
}
