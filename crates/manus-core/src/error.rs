//! Error types for the manus workspace

use thiserror::Error;

/// Core manus errors
#[derive(Error, Debug)]
pub enum ManusError {
    // Wire errors
    #[error("Truncated record: expected {expected} bytes, got {actual}")]
    TruncatedRecord { expected: usize, actual: usize },

    // Log errors
    #[error("Log format error: trailing record truncated after {decoded} records")]
    FormatError { decoded: usize },

    #[error("Frame index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Collaborator errors
    #[error("Frame format error: {0}")]
    FrameFormat(String),

    #[error("Representation error: {0}")]
    Representation(String),
}

/// Result type for manus operations
pub type ManusResult<T> = Result<T, ManusError>;
