//! Calendar model shared by the Clock Store, the field editors and the
//! date validator.
//!
//! Leap years follow the simple `year % 4 == 0` rule used by the RTC.

pub mod soft_rtc;

pub use soft_rtc::{Monotonic, SoftRtc};

use crate::error::Error;

/// Three-letter weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One reading of the clock: time of day, calendar date and weekday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockSnapshot {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// 1-12
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
    /// 0-6, Sunday = 0.
    pub weekday: u8,
}

impl ClockSnapshot {
    /// Advance by one second, carrying into minutes, hours, days, months
    /// and years. The weekday follows the day.
    pub fn advance_second(&mut self) {
        self.second += 1;
        if self.second < 60 {
            return;
        }
        self.second = 0;
        self.minute += 1;
        if self.minute < 60 {
            return;
        }
        self.minute = 0;
        self.hour += 1;
        if self.hour < 24 {
            return;
        }
        self.hour = 0;
        self.weekday = (self.weekday + 1) % 7;

        // `>=` so an out-of-range day committed through the month editor
        // still rolls over instead of counting past the month end.
        if self.day >= days_in_month(self.month, self.year) {
            self.day = 1;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year = self.year.wrapping_add(1);
            }
        } else {
            self.day += 1;
        }
    }

    /// Three-letter weekday name, or `"???"` for an out-of-range weekday.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES
            .get(self.weekday as usize)
            .copied()
            .unwrap_or("???")
    }
}

/// Whether `year` is a leap year under the RTC's divisible-by-four rule.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0
}

/// Number of days in `month` of `year`. Months outside 1-12 are treated
/// as 31-day months.
pub fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Accept `day` only if it lies in `1..=days_in_month(month, year)`.
pub fn validate_day(day: i32, month: u8, year: u16) -> Result<u8, Error> {
    let max = days_in_month(month, year);
    if (1..=max as i32).contains(&day) {
        Ok(day as u8)
    } else {
        Err(Error::InvalidDate { day, max })
    }
}

/// Fold a day that stepped past either end of the month back around:
/// above the month length becomes 1, below 1 becomes the month length.
pub fn wrap_day(day: i32, month: u8, year: u16) -> i32 {
    let max = days_in_month(month, year) as i32;
    if day > max {
        1
    } else if day < 1 {
        max
    } else {
        day
    }
}
