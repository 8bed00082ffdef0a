//! Fixed text layouts for the 16x2 character display.
//!
//! ```text
//!  home              top menu           field menu
//! ┌────────────────┐┌────────────────┐┌────────────────┐
//! │12:14:00    40°C││1.EDIT RTC INFO ││1.H 2.MI 3.S 4.D│
//! │30/10/2025  THU ││2.E.SET   3.EXT ││5.M 6.Y 7.DY 8.E│
//! └────────────────┘└────────────────┘└────────────────┘
//! ```

use core::fmt::Write;

use crate::clock::{ClockSnapshot, WEEKDAY_NAMES};
use crate::config::{
    POS_DATE, POS_EDITOR_VALUE, POS_SETPOINT_VALUE, POS_TEMPERATURE, POS_TIME, POS_WEEKDAY,
};
use crate::error::Error;
use crate::io::CharDisplay;
use crate::ui::Field;

type Cell = heapless::String<16>;

fn write_at<D: CharDisplay>(display: &mut D, pos: (u8, u8), text: &str) -> Result<(), Error> {
    display.set_cursor(pos.0, pos.1)?;
    display.write_str(text)
}

/// Render the live clock and temperature. Overwrites in place.
pub fn draw_home<D: CharDisplay>(
    display: &mut D,
    now: &ClockSnapshot,
    celsius: f32,
) -> Result<(), Error> {
    let mut cell = Cell::new();
    write!(cell, "{:02}:{:02}:{:02}", now.hour, now.minute, now.second)?;
    write_at(display, POS_TIME, &cell)?;

    cell.clear();
    write!(cell, "{:02}/{:02}/{:04}", now.day, now.month, now.year)?;
    write_at(display, POS_DATE, &cell)?;

    write_at(display, POS_WEEKDAY, now.weekday_name())?;

    // Whole degrees only; `as` saturates negatives to 0. The leading
    // blank wipes a stale hundreds digit.
    cell.clear();
    match (celsius as u32).min(999) {
        whole @ 0..=99 => write!(cell, " {:02}°C", whole)?,
        whole => write!(cell, "{:03}°C", whole)?,
    }
    write_at(display, POS_TEMPERATURE, &cell)
}

/// Render the top edit menu.
pub fn draw_top_menu<D: CharDisplay>(display: &mut D) -> Result<(), Error> {
    display.clear()?;
    write_at(display, (0, 0), "1.EDIT RTC INFO")?;
    write_at(display, (1, 0), "2.E.SET")?;
    write_at(display, (1, 10), "3.EXT")
}

/// Render the clock field chooser.
pub fn draw_field_menu<D: CharDisplay>(display: &mut D) -> Result<(), Error> {
    display.clear()?;
    write_at(display, (0, 0), "1.H 2.MI 3.S 4.D")?;
    write_at(display, (1, 0), "5.M 6.Y 7.DY 8.E")
}

/// Render the heading of a field editor.
pub fn draw_field_editor<D: CharDisplay>(display: &mut D, field: Field) -> Result<(), Error> {
    display.clear()?;
    write_at(display, (0, 0), field.title())
}

/// Redraw the value under edit. Weekdays are shown by name.
pub fn draw_field_value<D: CharDisplay>(
    display: &mut D,
    field: Field,
    value: i32,
) -> Result<(), Error> {
    let mut cell = Cell::new();
    match field {
        Field::Weekday => {
            let name = WEEKDAY_NAMES
                .get(value as usize)
                .copied()
                .unwrap_or("???");
            cell.push_str(name).map_err(|_| Error::BufferOverflow)?;
        }
        Field::Year => write!(cell, "{:<4}", value)?,
        _ => write!(cell, "{:<2}", value)?,
    }
    write_at(display, POS_EDITOR_VALUE, &cell)
}

/// Render the setpoint editor heading.
pub fn draw_setpoint_editor<D: CharDisplay>(display: &mut D, setpoint: u32) -> Result<(), Error> {
    display.clear()?;
    write_at(display, (0, 0), "SET TEMP:")?;
    draw_setpoint_value(display, setpoint)
}

/// Redraw the setpoint on the second line.
pub fn draw_setpoint_value<D: CharDisplay>(display: &mut D, setpoint: u32) -> Result<(), Error> {
    let mut cell = Cell::new();
    write!(cell, " {:02}°C  ", setpoint)?;
    write_at(display, POS_SETPOINT_VALUE, &cell)
}

/// Tell the user a date edit was thrown away.
pub fn draw_invalid_date<D: CharDisplay>(display: &mut D) -> Result<(), Error> {
    display.clear()?;
    write_at(display, (0, 0), "? INVALID DATE!")?;
    write_at(display, (1, 0), "Not Saved")
}
