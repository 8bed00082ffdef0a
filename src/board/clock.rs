//! Time base for the software RTC.

use embassy_time::Instant;
use tempmon::Monotonic;

/// Milliseconds since boot from the Embassy time driver (RTC1).
pub struct Uptime;

impl Monotonic for Uptime {
    fn now_ms(&mut self) -> u64 {
        Instant::now().as_millis()
    }
}
