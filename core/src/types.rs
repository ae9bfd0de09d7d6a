use std::io;

use crate::compression::CompressionError;

/// Unified stream error covering I/O, codec, and generic validation.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Messages aim to be stable and contextual for logs.
#[derive(Debug)]
pub enum StreamError {
    /// I/O error on the source or destination stream.
    Io(io::Error),

    /// Compression/decompression error.
    Compression(CompressionError),

    /// Generic high-level validation with a descriptive message.
    Validation(String),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
            StreamError::Compression(e) => write!(f, "compression error: {}", e),
            StreamError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<CompressionError> for StreamError {
    fn from(e: CompressionError) -> Self {
        StreamError::Compression(e)
    }
}
