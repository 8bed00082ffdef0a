//! Serial log line formats.
//!
//! Lines are built in fixed-capacity `heapless::String`s and handed to the
//! [`LogSink`](crate::io::LogSink) in one write each. Temperatures are
//! printed with six fractional digits.

use core::fmt::Write;

use crate::alert_logic::AlertLevel;
use crate::clock::ClockSnapshot;
use crate::error::Error;

/// Longest line we produce is the alert line (~70 bytes).
pub type LogLine = heapless::String<96>;

pub const EDIT_MODE_BANNER: &str = "***EDIT MODE ACTIVATED***\n";
pub const TIME_EDIT_BANNER: &str = "***** Time Editing Mode Activated *****\n";
pub const SETPOINT_EDIT_BANNER: &str = "*** Set Point Editing Mode Activated ***\n";
pub const INVALID_DATE_WARNING: &str = "[WARN] Invalid Date Entered, Not Saved!\n";
pub const DATE_UPDATED: &str = "[OK] Date Updated Successfully!\n";

/// Power-up line: `LM35 TEST: \nTemperature : 40.000000°C\n`.
pub fn startup(celsius: f32) -> Result<LogLine, Error> {
    let mut line = LogLine::new();
    write!(line, "LM35 TEST: \nTemperature : {:.6}°C\n", celsius)?;
    Ok(line)
}

/// Periodic reading, tagged as an alert when over the setpoint:
///
/// ```text
/// Temp: 40.000000°C @  12:14:00  30/10/2025
/// [ALERT!] Temp: 50.000000°C @  12:14:00  30/10/2025 - OVER TEMP
/// ```
pub fn reading(level: AlertLevel, celsius: f32, at: &ClockSnapshot) -> Result<LogLine, Error> {
    let mut line = LogLine::new();
    if level == AlertLevel::OverTemp {
        line.push_str("[ALERT!] ")
            .map_err(|_| Error::BufferOverflow)?;
    }
    write!(
        line,
        "Temp: {:.6}°C @  {:02}:{:02}:{:02}  {:02}/{:02}/{}",
        celsius, at.hour, at.minute, at.second, at.day, at.month, at.year
    )?;
    if level == AlertLevel::OverTemp {
        line.push_str(" - OVER TEMP")
            .map_err(|_| Error::BufferOverflow)?;
    }
    line.push('\n').map_err(|_| Error::BufferOverflow)?;
    Ok(line)
}
