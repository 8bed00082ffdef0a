//! Library interface for tempmon.
//!
//! Everything here is `no_std` and generic over `embedded-hal` traits, so
//! the keypad decoder, calendar and menu state machine run on the host
//! under `cargo test` as well as on the nRF52840.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and only supplies the board adapters in `board/`.

#![cfg_attr(not(test), no_std)]

// Must come first: the logging macros are textually scoped.
#[macro_use]
mod fmt;

pub mod alert_logic;
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod io;
pub mod log_line;
pub mod sensor;
pub mod ui;

#[cfg(test)]
mod testing;

pub use alert_logic::{classify, AlertLevel, LogGate};
pub use app::{Parts, Station};
pub use clock::{ClockSnapshot, Monotonic, SoftRtc};
pub use error::Error;
pub use io::{CharDisplay, ClockStore, LogSink, TemperatureSensor};
pub use ui::keypad::{KeyDecoder, Keypad};
pub use ui::{Field, KeyCode, MenuAction, MenuContext};
