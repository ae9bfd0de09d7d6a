//! Deflate (zlib wrapper) via flate2 with incremental enc/dec engines.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::compression::types::{
    CompressionError, Decoder, Encoder, StepOutcome, StreamStatus,
};
use crate::constants::DEFAULT_LEVEL_DEFLATE;

/// Stateful deflate compressor. One instance per operation; internal
/// window state is carried across steps and released by Drop.
pub struct DeflateEncoder {
    inner: Compress,
}

impl DeflateEncoder {
    pub fn new(level: Option<i32>) -> Result<Self, CompressionError> {
        let lvl = match level.unwrap_or(DEFAULT_LEVEL_DEFLATE) {
            l @ 0..=9 => Compression::new(l as u32),
            _ => Compression::default(),
        };
        // zlib wrapper: header plus Adler-32 trailer
        Ok(Self {
            inner: Compress::new(lvl, true),
        })
    }
}

impl Encoder for DeflateEncoder {
    fn encode_step(
        &mut self,
        input: &[u8],
        out: &mut [u8],
        finish: bool,
    ) -> Result<StepOutcome, CompressionError> {
        let flush = if finish {
            FlushCompress::Finish
        } else {
            FlushCompress::None
        };

        let before_in = self.inner.total_in();
        let before_out = self.inner.total_out();
        let status = self
            .inner
            .compress(input, out, flush)
            .map_err(|e| CompressionError::CodecProcessFailed {
                codec: "deflate".into(),
                msg: e.to_string(),
            })?;

        Ok(StepOutcome {
            consumed: (self.inner.total_in() - before_in) as usize,
            produced: (self.inner.total_out() - before_out) as usize,
            status: match status {
                Status::StreamEnd => StreamStatus::Finished,
                Status::Ok | Status::BufError => StreamStatus::Working,
            },
        })
    }
}

/// Stateful deflate decompressor. Detects the logical end of the
/// compressed stream on its own; no finish signal is needed.
pub struct DeflateDecoder {
    inner: Decompress,
}

impl DeflateDecoder {
    pub fn new() -> Result<Self, CompressionError> {
        Ok(Self {
            inner: Decompress::new(true),
        })
    }
}

impl Decoder for DeflateDecoder {
    fn decode_step(
        &mut self,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<StepOutcome, CompressionError> {
        let before_in = self.inner.total_in();
        let before_out = self.inner.total_out();

        // Hard failures (data error, dictionary needed, engine memory
        // error) surface here, before any output from this step is used.
        let status = self
            .inner
            .decompress(input, out, FlushDecompress::None)
            .map_err(|e| CompressionError::CorruptStream { msg: e.to_string() })?;

        Ok(StepOutcome {
            consumed: (self.inner.total_in() - before_in) as usize,
            produced: (self.inner.total_out() - before_out) as usize,
            status: match status {
                Status::StreamEnd => StreamStatus::Finished,
                Status::Ok | Status::BufError => StreamStatus::Working,
            },
        })
    }
}
