//! Unified error type for tempmon.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// Transaction to the character display failed.
    Display,

    // Serial
    /// The serial log transmitter rejected a write.
    Serial,

    // Sensor
    /// Temperature sample could not be taken.
    Sensor,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,

    // Calendar
    /// Day-of-month outside `1..=max` for the month being committed.
    InvalidDate {
        /// Rejected day value.
        day: i32,
        /// Number of days in the target month.
        max: u8,
    },
}

// Convenience conversions

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::BufferOverflow
    }
}
