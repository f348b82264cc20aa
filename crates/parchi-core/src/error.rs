//! Error types for the parchi-core library.

use thiserror::Error;

/// Main error type for the parchi library.
///
/// Extraction itself is total and never returns an error; the only
/// failure domain is upstream of the engine, when a [`TextSource`]
/// cannot turn an image into text. That failure must reach the caller
/// before the analyzer is ever invoked.
///
/// [`TextSource`]: crate::source::TextSource
#[derive(Error, Debug)]
pub enum ParchiError {
    /// Text recognition failed; no document was produced.
    #[error("text recognition failed: {0}")]
    RecognitionFailed(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the parchi library.
pub type Result<T> = std::result::Result<T, ParchiError>;
