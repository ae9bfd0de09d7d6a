//! compression/types.rs
//! Engine step contract and codec error type.

use std::fmt;

/// Engine progress reported by one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    /// The engine can accept more input or still holds pending output.
    Working,
    /// The engine reached its terminal state and emitted all output.
    Finished,
}

/// Explicit bookkeeping for one engine step: how much of the presented
/// input was consumed, how much of the output capacity was filled, and
/// whether the engine reached its terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub consumed: usize,
    pub produced: usize,
    pub status: StreamStatus,
}

#[derive(Debug)]
pub enum CompressionError {
    CodecInitFailed { codec: String, msg: String },
    CodecProcessFailed { codec: String, msg: String },
    /// The decoder rejected the stream: bad data, external dictionary
    /// required, or allocation failure inside the engine.
    CorruptStream { msg: String },
    /// Input ended before the decoder observed the logical end of stream.
    TruncatedStream,
    StateError(String),
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            CodecInitFailed { codec, msg } =>
                write!(f, "codec {} init failed: {}", codec, msg),
            CodecProcessFailed { codec, msg } =>
                write!(f, "codec {} process failed: {}", codec, msg),
            CorruptStream { msg } =>
                write!(f, "corrupt stream: {}", msg),
            TruncatedStream =>
                write!(f, "truncated stream: input ended before end-of-stream marker"),
            StateError(msg) =>
                write!(f, "compression state error: {}", msg),
        }
    }
}

impl std::error::Error for CompressionError {}

// Require Send so engines can cross thread boundaries.
pub trait Encoder: Send {
    /// Run one compression step over `input`, filling `out` from the start.
    /// `finish` marks the final input chunk; the engine must then drain all
    /// remaining output before reporting `Finished`.
    fn encode_step(
        &mut self,
        input: &[u8],
        out: &mut [u8],
        finish: bool,
    ) -> Result<StepOutcome, CompressionError>;
}

pub trait Decoder: Send {
    /// Run one decompression step over `input`, filling `out` from the
    /// start. The engine detects the logical end of stream on its own.
    fn decode_step(&mut self, input: &[u8], out: &mut [u8])
        -> Result<StepOutcome, CompressionError>;
}
