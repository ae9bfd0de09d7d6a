//! telemetry/mod.rs
//! Counters, timer, and immutable snapshot for one streaming operation.
//!
//! Notes:
//! - Counters stay mutable only inside the running loop.
//! - The snapshot is immutable and serializable for reporting.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::*;
pub use snapshot::*;
pub use timers::*;
