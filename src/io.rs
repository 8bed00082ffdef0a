//! Narrow interfaces to the board's peripherals.
//!
//! The state machine only talks to hardware through these traits and the
//! `embedded-hal` pin/delay traits, so it can run on the host against
//! test doubles.

use crate::clock::ClockSnapshot;
use crate::error::Error;

/// Character display addressed by row and column (16x2 layout).
pub trait CharDisplay {
    /// Blank the whole display and home the cursor.
    fn clear(&mut self) -> Result<(), Error>;

    /// Move the cursor; the next write starts here.
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error>;

    /// Write text at the cursor, advancing it.
    fn write_str(&mut self, text: &str) -> Result<(), Error>;
}

/// Serial text log.
pub trait LogSink {
    fn write_str(&mut self, text: &str) -> Result<(), Error>;
}

/// Temperature source in degrees Celsius.
pub trait TemperatureSensor {
    fn read_celsius(&mut self) -> Result<f32, Error>;
}

/// Time of day, calendar date and weekday storage.
pub trait ClockStore {
    fn now(&mut self) -> ClockSnapshot;
    fn set_time(&mut self, hour: u8, minute: u8, second: u8);
    fn set_date(&mut self, day: u8, month: u8, year: u16);
    fn set_weekday(&mut self, weekday: u8);
}
