//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No encoder for this file extension (or its feature is disabled).
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Image has no pixels to encode.
    #[error("cannot encode empty image {width}x{height}")]
    EmptyImage {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
