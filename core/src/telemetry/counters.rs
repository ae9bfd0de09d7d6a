//! telemetry/counters.rs
//! Mutable counters used during one streaming operation.
//!
//! Summary: collects chunk and byte counts during encode/decode.
//! Converted into an immutable TelemetrySnapshot at operation end.

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq)]
pub struct StreamCounters {
    pub chunks_in: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub checksum: u32,
}

impl StreamCounters {
    /// Record one chunk read from the source stream.
    pub fn add_read(&mut self, len: usize) {
        if len > 0 {
            self.chunks_in += 1;
        }
        self.bytes_read += len as u64;
    }

    /// Record bytes appended to the destination stream.
    pub fn add_written(&mut self, len: usize) {
        self.bytes_written += len as u64;
    }

    /// Record the CRC32 of the plaintext side of the operation.
    pub fn set_checksum(&mut self, crc: u32) {
        self.checksum = crc;
    }
}
