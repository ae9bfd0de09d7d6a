//! telemetry/snapshot.rs
//! Immutable snapshot of one finished streaming operation.
//!
//! Design notes:
//! - Counters and ratio are captured once, at operation end.
//! - `output` carries the captured Memory-sink buffer for tests only and
//!   is never serialized.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::StreamCounters;
use crate::telemetry::timers::TelemetryTimer;

/// Core telemetry snapshot.
/// Captures counters, ratio, throughput, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub chunks_in: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// CRC32 of the plaintext side (source bytes when compressing,
    /// recovered bytes when decompressing).
    pub checksum: u32,
    pub compression_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    /// Captured output for Memory sinks (tests/benchmarks only).
    #[serde(skip)]
    pub output: Option<Vec<u8>>,
}

impl TelemetrySnapshot {
    pub fn from(counters: &StreamCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_read > 0 {
            counters.bytes_written as f64 / counters.bytes_read as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_read as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            chunks_in: counters.chunks_in,
            bytes_read: counters.bytes_read,
            bytes_written: counters.bytes_written,
            checksum: counters.checksum,
            compression_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            output: None,
        }
    }

    pub fn attach_output(&mut self, bytes: Vec<u8>) {
        self.output = Some(bytes);
    }

    pub fn output_bytes(&self) -> u64 {
        self.bytes_written
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
