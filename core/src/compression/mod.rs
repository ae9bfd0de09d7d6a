//! compression/mod.rs
//! Streaming-safe deflate compression and decompression.
//!
//! Notes:
//! - The deflate bit-level algorithm is consumed through flate2, never
//!   reimplemented here.
//! - Exactly one fresh engine instance per operation; the engine is
//!   released by Drop on every exit path.

pub mod deflate;
pub mod stream;
pub mod types;

pub use deflate::*;
pub use stream::*;
pub use types::*;
