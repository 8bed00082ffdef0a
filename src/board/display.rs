//! SSD1306 OLED driven as a 16x2 character display.
//!
//! The panel has no text mode, so a character grid is kept in RAM and the
//! whole frame is redrawn and flushed after every change.

use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use tempmon::config::{DISPLAY_COLS, DISPLAY_ROWS};
use tempmon::{CharDisplay, Error};

/// Type alias for the concrete display driver.
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Pixel pitch between the two text rows.
const ROW_PITCH: i32 = 16;
/// Top margin so the rows sit in the middle of the panel.
const TOP: i32 = 16;

pub struct OledChars<I2C> {
    panel: Panel<I2C>,
    grid: [[char; DISPLAY_COLS]; DISPLAY_ROWS],
    cursor: (usize, usize),
}

impl<I2C> OledChars<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and clear the screen.
    ///
    /// A panel that does not answer is only logged: every later draw
    /// reports `Error::Display` and the station keeps monitoring.
    pub fn init(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if panel.init().is_err() {
            defmt::warn!("SSD1306 init failed");
        }
        let mut display = Self {
            panel,
            grid: [[' '; DISPLAY_COLS]; DISPLAY_ROWS],
            cursor: (0, 0),
        };
        let _ = display.render();
        display
    }

    fn render(&mut self) -> Result<(), Error> {
        self.panel.clear_buffer();
        for (row, cells) in self.grid.iter().enumerate() {
            // Up to two UTF-8 bytes per cell ('°').
            let mut line: heapless::String<{ DISPLAY_COLS * 2 }> = heapless::String::new();
            for &ch in cells {
                line.push(ch).map_err(|_| Error::BufferOverflow)?;
            }
            let origin = Point::new(0, TOP + row as i32 * ROW_PITCH);
            Text::with_baseline(line.as_str(), origin, text_style(), Baseline::Top)
                .draw(&mut self.panel)
                .map_err(|_| Error::Display)?;
        }
        self.panel.flush().map_err(|_| Error::Display)
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> CharDisplay for OledChars<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.grid = [[' '; DISPLAY_COLS]; DISPLAY_ROWS];
        self.cursor = (0, 0);
        self.render()
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.cursor = (row as usize, col as usize);
        Ok(())
    }

    /// Characters past the end of a row are dropped.
    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        let (row, mut col) = self.cursor;
        for ch in text.chars() {
            if row < DISPLAY_ROWS && col < DISPLAY_COLS {
                self.grid[row][col] = ch;
            }
            col += 1;
        }
        self.cursor = (row, col);
        self.render()
    }
}
