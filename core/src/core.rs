// ## `core.rs` — stable public API

use crate::{
    compression::{
        stream::{decode_stream, encode_stream},
        DeflateDecoder, DeflateEncoder,
    },
    constants::BUFFER_SIZE,
    io::{open_input, open_output, InputSource, OutputSink},
    telemetry::{StreamCounters, TelemetrySnapshot, TelemetryTimer},
    types::StreamError,
};

#[derive(Clone, Debug, Default)]
pub struct CompressParams {
    /// Deflate level 0..=9; `None` selects the default level.
    pub level: Option<i32>,
}

impl CompressParams {
    pub fn validate(&self) -> Result<(), StreamError> {
        match self.level {
            None | Some(0..=9) => Ok(()),
            Some(l) => Err(StreamError::Validation(format!(
                "invalid deflate level: {l}, must be in 0..=9"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DecompressParams;

impl DecompressParams {
    pub fn validate(&self) -> Result<(), StreamError> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Whether to capture the output buffer in memory.
    /// - `None` or `Some(false)` → no buffer capture (production default).
    /// - `Some(true)` → capture buffer for tests/benchmarks.
    pub with_buf: Option<bool>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            with_buf: Some(false), // default: no buffer
        }
    }
}

impl ApiConfig {
    pub fn new(with_buf: Option<bool>) -> Self {
        Self {
            with_buf: with_buf.or(Some(false)),
        }
    }

    pub fn with_buf_enabled() -> Self {
        Self {
            with_buf: Some(true),
        }
    }
}

/// Compress a raw byte stream into a deflate (zlib-wrapped) stream.
///
/// One fresh engine per call; engine and both streams are released on
/// every exit path. An existing destination file is overwritten.
pub fn compress_stream(
    input: InputSource,
    output: OutputSink,
    params: CompressParams,
    config: ApiConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    params.validate()?;

    let mut reader = open_input(input)?;
    let (mut writer, maybe_buf) = open_output(output, config.with_buf)?;

    let mut engine = DeflateEncoder::new(params.level)?;
    let mut counters = StreamCounters::default();
    let timer = TelemetryTimer::start();

    encode_stream(
        &mut reader,
        &mut writer,
        &mut engine,
        BUFFER_SIZE,
        &mut counters,
    )?;

    let mut snapshot = TelemetrySnapshot::from(&counters, &timer);

    // --- Buffer extraction for tests ---
    if let Some(ref arc_buf) = maybe_buf {
        let buf = arc_buf.lock().unwrap();
        snapshot.attach_output(buf.clone());
    }

    Ok(snapshot)
}

/// Decompress a deflate (zlib-wrapped) stream back into the original
/// bytes. Success requires the engine to positively reach its terminal
/// state; a stream that merely runs out of input is reported as
/// truncated.
pub fn decompress_stream(
    input: InputSource,
    output: OutputSink,
    params: DecompressParams,
    config: ApiConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    params.validate()?;

    let mut reader = open_input(input)?;
    let (mut writer, maybe_buf) = open_output(output, config.with_buf)?;

    let mut engine = DeflateDecoder::new()?;
    let mut counters = StreamCounters::default();
    let timer = TelemetryTimer::start();

    decode_stream(
        &mut reader,
        &mut writer,
        &mut engine,
        BUFFER_SIZE,
        &mut counters,
    )?;

    let mut snapshot = TelemetrySnapshot::from(&counters, &timer);

    // --- Buffer extraction for tests ---
    if let Some(ref arc_buf) = maybe_buf {
        let buf = arc_buf.lock().unwrap();
        snapshot.attach_output(buf.clone());
    }

    Ok(snapshot)
}
