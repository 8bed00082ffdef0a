//! nRF52840 adapters for the station's collaborator traits.
//!
//! Keypad rows/columns, the edit button and the alert LED are plain
//! `embassy_nrf::gpio` pins and need no wrapper.

pub mod clock;
pub mod display;
pub mod sensor;
pub mod serial;
