//! Error types for chroma operations

use thiserror::Error;

/// Result type for chroma operations
pub type ChromaResult<T> = Result<T, ChromaError>;

/// Errors that can occur around the color engine.
///
/// Color conversions themselves never fail; out-of-range values are clamped.
/// Errors only arise at the boundary where pixel data enters the engine.
#[derive(Error, Debug)]
pub enum ChromaError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unreadable image: {0}")]
    UnreadableImage(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Unknown color model: {0}")]
    UnknownModel(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
