// compression/stream.rs
//! Streaming loops that drive a codec engine with fixed-size buffers.
//!
//! Both directions share one shape: read a chunk, feed the engine, drain
//! engine output in an inner loop, repeat until the input is exhausted and
//! the engine reports its terminal state. Memory stays bounded by the two
//! buffer capacities regardless of input size.

use std::io::{Read, Write};

use crc32fast::Hasher;

use crate::compression::types::{CompressionError, Decoder, Encoder, StreamStatus};
use crate::constants::MAX_BUFFER_SIZE;
use crate::io::read_chunk;
use crate::telemetry::StreamCounters;
use crate::types::StreamError;

/// Compress everything from `reader` into `writer` in `buffer_size` blocks.
/// The final chunk is signaled to the engine with finish; the outer loop
/// exits only after that chunk has been fully drained.
pub fn encode_stream<R: Read, W: Write, E: Encoder>(
    reader: &mut R,
    writer: &mut W,
    engine: &mut E,
    buffer_size: usize,
    counters: &mut StreamCounters,
) -> Result<(), StreamError> {
    assert!(buffer_size > 0 && buffer_size <= MAX_BUFFER_SIZE);
    let mut inbuf = vec![0u8; buffer_size];
    let mut outbuf = vec![0u8; buffer_size];
    let mut crc = Hasher::new();

    loop {
        let n = read_chunk(reader, &mut inbuf)?;
        // A short fill means the reader hit end-of-stream.
        let finish = n < inbuf.len();
        counters.add_read(n);
        crc.update(&inbuf[..n]);

        let mut pending = &inbuf[..n];
        loop {
            let outcome = engine
                .encode_step(pending, &mut outbuf, finish)
                .map_err(StreamError::Compression)?;
            pending = &pending[outcome.consumed..];
            writer.write_all(&outbuf[..outcome.produced])?;
            counters.add_written(outcome.produced);

            // The engine may leave output space while input is still
            // pending; the chunk is drained only once all input was taken
            // and output space remains. The finish chunk drains until the
            // terminal state.
            if finish {
                if outcome.status == StreamStatus::Finished {
                    break;
                }
            } else if pending.is_empty() && outcome.produced < outbuf.len() {
                break;
            }
            // A zero-progress step means there is nothing left to move.
            if outcome.consumed == 0 && outcome.produced == 0 {
                break;
            }
        }

        if finish {
            break;
        }
    }

    counters.set_checksum(crc.finalize());
    writer.flush()?;
    Ok(())
}

/// Decompress everything from `reader` into `writer` in `buffer_size`
/// blocks. Succeeds only if the engine positively reported its terminal
/// state; running out of input first is a truncated stream.
pub fn decode_stream<R: Read, W: Write, D: Decoder>(
    reader: &mut R,
    writer: &mut W,
    engine: &mut D,
    buffer_size: usize,
    counters: &mut StreamCounters,
) -> Result<(), StreamError> {
    assert!(buffer_size > 0 && buffer_size <= MAX_BUFFER_SIZE);
    let mut inbuf = vec![0u8; buffer_size];
    let mut outbuf = vec![0u8; buffer_size];
    let mut crc = Hasher::new();
    let mut status = StreamStatus::Working;

    while status == StreamStatus::Working {
        let n = read_chunk(reader, &mut inbuf)?;
        if n == 0 {
            break;
        }
        counters.add_read(n);

        let mut pending = &inbuf[..n];
        loop {
            // The step result is checked before any output from this call
            // is written.
            let outcome = engine
                .decode_step(pending, &mut outbuf)
                .map_err(StreamError::Compression)?;
            pending = &pending[outcome.consumed..];
            crc.update(&outbuf[..outcome.produced]);
            writer.write_all(&outbuf[..outcome.produced])?;
            counters.add_written(outcome.produced);
            status = outcome.status;

            if status == StreamStatus::Finished {
                break;
            }
            // The engine drains its internal window in steps that can
            // leave output space while input is still pending; the chunk
            // is done only once all input was taken and output space
            // remains.
            if pending.is_empty() && outcome.produced < outbuf.len() {
                break;
            }
            // A zero-progress step means there is nothing left to move.
            if outcome.consumed == 0 && outcome.produced == 0 {
                break;
            }
        }
        // Input past the terminal state is ignored, as inflate would.
    }

    if status != StreamStatus::Finished {
        return Err(StreamError::Compression(CompressionError::TruncatedStream));
    }

    counters.set_checksum(crc.finalize());
    writer.flush()?;
    Ok(())
}
