//! RAM-backed real-time clock.
//!
//! Keeps a [`ClockSnapshot`] and advances it from a free-running
//! millisecond counter. Writing the time of day restarts the sub-second
//! phase, the way loading the RTC counter registers does; calendar writes
//! keep it.

use super::ClockSnapshot;
use crate::io::ClockStore;

/// Free-running millisecond source (e.g. `embassy_time::Instant`).
pub trait Monotonic {
    fn now_ms(&mut self) -> u64;
}

/// Software calendar clock driven by a [`Monotonic`] source.
pub struct SoftRtc<M> {
    mono: M,
    current: ClockSnapshot,
    /// Millisecond timestamp that `current` corresponds to.
    anchor_ms: u64,
}

impl<M: Monotonic> SoftRtc<M> {
    /// Start the clock at `initial`.
    pub fn new(mut mono: M, initial: ClockSnapshot) -> Self {
        let anchor_ms = mono.now_ms();
        Self {
            mono,
            current: initial,
            anchor_ms,
        }
    }

    /// Fold every whole second elapsed since the anchor into the calendar.
    fn sync(&mut self) {
        let now = self.mono.now_ms();
        let elapsed_secs = now.saturating_sub(self.anchor_ms) / 1000;
        for _ in 0..elapsed_secs {
            self.current.advance_second();
        }
        self.anchor_ms += elapsed_secs * 1000;
    }

    fn restart_phase(&mut self) {
        self.anchor_ms = self.mono.now_ms();
    }
}

impl<M: Monotonic> ClockStore for SoftRtc<M> {
    fn now(&mut self) -> ClockSnapshot {
        self.sync();
        self.current
    }

    fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.sync();
        self.current.hour = hour;
        self.current.minute = minute;
        self.current.second = second;
        self.restart_phase();
    }

    fn set_date(&mut self, day: u8, month: u8, year: u16) {
        self.sync();
        self.current.day = day;
        self.current.month = month;
        self.current.year = year;
    }

    fn set_weekday(&mut self, weekday: u8) {
        self.sync();
        self.current.weekday = weekday;
    }
}
