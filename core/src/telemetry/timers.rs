//! telemetry/timers.rs
//! Wall-clock timer for one streaming operation.

use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug)]
pub struct TelemetryTimer {
    start: Instant,
}

impl TelemetryTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
