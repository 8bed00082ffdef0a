//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, key assignments, display positions and sensor
//! scaling live here so they can be tuned in one place.

use crate::clock::ClockSnapshot;

// Timing

/// Debounce applied after a keypad key goes down and after it is released (ms).
pub const KEY_DEBOUNCE_MS: u32 = 20;

/// Debounce for the edit-mode push button (ms).
pub const EDIT_BUTTON_DEBOUNCE_MS: u32 = 50;

/// Cadence of the field and setpoint editors. Holding a key in a field
/// editor repeats at this interval.
pub const EDITOR_REPEAT_MS: u32 = 200;

/// Pause before each key wait in the top-level edit menu (ms).
pub const MENU_SETTLE_MS: u32 = 10;

/// Sampling interval while blocking on a key press or release (ms).
pub const KEY_POLL_INTERVAL_MS: u32 = 1;

/// How long the "invalid date" screen stays up before the field menu returns.
pub const INVALID_DATE_HOLD_MS: u32 = 1200;

/// Pause between two monitoring iterations (ms).
pub const MONITOR_PERIOD_MS: u32 = 100;

// Keypad

/// Logical key codes for each row/column intersection of the 4x4 matrix.
///
/// Row 2, column 1 is wired as `0` on the reference keypad.
pub const KEYMAP: [[u8; 4]; 4] = [
    [1, 2, 3, 4],
    [5, 6, 7, 8],
    [9, 0, 11, 12],
    [13, 14, 15, 16],
];

/// Key that confirms an editor or leaves it.
pub const KEY_CONFIRM: u8 = 13;

/// Key that increments the value under edit.
pub const KEY_INCREMENT: u8 = 15;

/// Key that decrements the value under edit.
pub const KEY_DECREMENT: u8 = 16;

/// Number of options in the top edit menu (`1.EDIT RTC INFO`, `2.E.SET`, `3.EXT`).
pub const TOP_MENU_ITEMS: u8 = 3;

/// Number of options in the clock field menu (seven fields plus exit).
pub const FIELD_MENU_ITEMS: u8 = 8;

// Defaults restored on every power-up

/// Alarm setpoint in whole degrees Celsius.
pub const DEFAULT_SETPOINT_C: u32 = 46;

/// Clock value loaded at power-up: 12:14:00, Thursday 30/10/2025.
pub const DEFAULT_CLOCK: ClockSnapshot = ClockSnapshot {
    hour: 12,
    minute: 14,
    second: 0,
    day: 30,
    month: 10,
    year: 2025,
    weekday: 4,
};

// Display geometry (16x2 character grid)

pub const DISPLAY_COLS: usize = 16;
pub const DISPLAY_ROWS: usize = 2;

/// (row, column) positions on the home screen.
pub const POS_TIME: (u8, u8) = (0, 0);
/// Temperature field is five cells wide: three digits and "°C".
pub const POS_TEMPERATURE: (u8, u8) = (0, 11);
pub const POS_DATE: (u8, u8) = (1, 0);
pub const POS_WEEKDAY: (u8, u8) = (1, 12);

/// Where field editors redraw the value under edit.
pub const POS_EDITOR_VALUE: (u8, u8) = (0, 10);

/// Where the setpoint editor redraws the setpoint.
pub const POS_SETPOINT_VALUE: (u8, u8) = (1, 0);

// LM35 sensor

/// LM35 output slope.
pub const LM35_MV_PER_DEGREE: f32 = 10.0;

/// SAADC full-scale input with the internal 0.6 V reference and 1/6 gain.
pub const ADC_FULL_SCALE_MV: f32 = 3600.0;

/// Largest SAADC count at 12-bit resolution.
pub const ADC_MAX_COUNT: f32 = 4095.0;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Keypad rows R0..R3    → P1.01, P1.02, P1.03, P1.04  (outputs, idle high)
//   Keypad cols C0..C3    → P1.05, P1.06, P1.07, P1.08  (inputs, pull-up)
//   Edit button           → P0.11                      (active-low)
//   Alert LED             → P0.13
//   LM35 output           → P0.02 / AIN0
//   UARTE0 TX / RX        → P0.06 / P0.08
//   I²C SDA / SCL         → P0.26 / P0.27

/// Serial log baud rate.
pub const SERIAL_BAUD: u32 = 9600;
