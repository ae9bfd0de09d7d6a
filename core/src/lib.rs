//! dpipe-core
//!
//! Bounded-memory deflate file streaming engine.
//! No archive containers, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec and observability
pub mod compression;
pub mod telemetry;

// Stream layers
pub mod core;
pub mod io;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::core::{
        compress_stream, decompress_stream, ApiConfig, CompressParams, DecompressParams,
    };
    pub use crate::io::{InputSource, OutputSink};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::StreamError;
}
