//! Error types for the pagination core

use thiserror::Error;

/// Result type alias for mini-pager operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the fallible internals.
///
/// None of these reach the renderer: the splitter falls back to a single page
/// and rejected margin/zoom input keeps the previous value.
#[derive(Error, Debug)]
pub enum Error {
    /// Document JSON could not be parsed at all.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is not a traversable node sequence.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A single node in the sequence is malformed.
    #[error("Malformed node at index {index}: {reason}")]
    MalformedNode { index: usize, reason: String },

    /// Margin input was non-numeric, negative or not finite.
    #[error("Invalid margin value: {0}")]
    InvalidMargin(String),

    /// Margin side name was not one of top/right/bottom/left.
    #[error("Unknown margin side: {0}")]
    UnknownSide(String),

    /// Zoom percentage must be positive.
    #[error("Invalid zoom percentage: {0}")]
    InvalidZoom(u32),

    /// I/O error when reading a document from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
