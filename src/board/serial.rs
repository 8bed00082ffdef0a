//! UARTE0 text log.

use embassy_nrf::uarte::{Baudrate, Instance, Uarte};
use tempmon::{Error, LogSink};

/// EasyDMA only reads from RAM, so text from flash goes through this
/// stack buffer in chunks.
const CHUNK: usize = 64;

/// UARTE divider for a rate in bits per second, if the peripheral has one.
pub const fn baudrate(bps: u32) -> Option<Baudrate> {
    Some(match bps {
        1200 => Baudrate::BAUD1200,
        2400 => Baudrate::BAUD2400,
        4800 => Baudrate::BAUD4800,
        9600 => Baudrate::BAUD9600,
        14400 => Baudrate::BAUD14400,
        19200 => Baudrate::BAUD19200,
        28800 => Baudrate::BAUD28800,
        31250 => Baudrate::BAUD31250,
        38400 => Baudrate::BAUD38400,
        56000 => Baudrate::BAUD56000,
        57600 => Baudrate::BAUD57600,
        76800 => Baudrate::BAUD76800,
        115200 => Baudrate::BAUD115200,
        230400 => Baudrate::BAUD230400,
        250000 => Baudrate::BAUD250000,
        460800 => Baudrate::BAUD460800,
        921600 => Baudrate::BAUD921600,
        1000000 => Baudrate::BAUD1M,
        _ => return None,
    })
}

pub struct SerialLog<'d, T: Instance> {
    uart: Uarte<'d, T>,
}

impl<'d, T: Instance> SerialLog<'d, T> {
    pub fn new(uart: Uarte<'d, T>) -> Self {
        Self { uart }
    }
}

impl<'d, T: Instance> LogSink for SerialLog<'d, T> {
    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        let mut buf = [0u8; CHUNK];
        for chunk in text.as_bytes().chunks(CHUNK) {
            let out = &mut buf[..chunk.len()];
            out.copy_from_slice(chunk);
            self.uart.blocking_write(out).map_err(|e| {
                defmt::warn!("UARTE write failed: {}", e);
                Error::Serial
            })?;
        }
        Ok(())
    }
}
