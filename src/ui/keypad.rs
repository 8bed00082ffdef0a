//! 4x4 matrix keypad decoder.
//!
//! Rows are outputs, idle high; a row is "active" when driven low.
//! Columns are inputs with pull-ups; a column reads low when a key on an
//! active row connects it. Pressing a key shorts one row to one column.
//!
//! Each blocking wait samples the matrix every `KEY_POLL_INTERVAL_MS`,
//! then debounces the edge before trusting it.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::KeyCode;
use crate::config::{KEY_DEBOUNCE_MS, KEY_POLL_INTERVAL_MS};

const ROWS: usize = 4;
const COLS: usize = 4;

/// Source of decoded key presses.
pub trait Keypad {
    /// True if any key is down, sampled with every row active at once.
    fn is_any_key_down(&mut self) -> bool;

    /// Scan the matrix and return the code of the key that is down.
    ///
    /// Only meaningful while a key is down: with nothing pressed the scan
    /// falls back to the last row and last column.
    fn decode_pressed_key(&mut self) -> KeyCode;

    /// Block for one complete press-and-release cycle and return its code.
    fn wait_for_key_press(&mut self) -> KeyCode;

    /// Non-blocking, non-debounced read: the key currently held, if any.
    ///
    /// Called repeatedly this auto-repeats for as long as the key is held.
    fn poll_key(&mut self) -> Option<KeyCode> {
        if self.is_any_key_down() {
            Some(self.decode_pressed_key())
        } else {
            None
        }
    }
}

/// Row/column scanning decoder over `embedded-hal` pins.
pub struct KeyDecoder<R, C, D> {
    rows: [R; ROWS],
    cols: [C; COLS],
    delay: D,
}

impl<R, C, D> KeyDecoder<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    /// Take ownership of the pins and park every row inactive.
    pub fn new(rows: [R; ROWS], cols: [C; COLS], delay: D) -> Self {
        let mut decoder = Self { rows, cols, delay };
        decoder.release_rows();
        decoder
    }

    fn release_rows(&mut self) {
        for row in self.rows.iter_mut() {
            let _ = row.set_high();
        }
    }

    fn drive_all_rows(&mut self) {
        for row in self.rows.iter_mut() {
            let _ = row.set_low();
        }
    }

    /// Drive `active` low and every other row high.
    fn drive_only(&mut self, active: usize) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            let _ = if i == active {
                row.set_low()
            } else {
                row.set_high()
            };
        }
    }

    /// A pin read error counts as "not pressed".
    fn column_asserted(&mut self, col: usize) -> bool {
        self.cols[col].is_low().unwrap_or(false)
    }

    fn any_column_asserted(&mut self) -> bool {
        (0..COLS).any(|col| self.column_asserted(col))
    }

    fn wait_until(&mut self, down: bool) {
        while self.is_any_key_down() != down {
            self.delay.delay_ms(KEY_POLL_INTERVAL_MS);
        }
    }
}

impl<R, C, D> Keypad for KeyDecoder<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    fn is_any_key_down(&mut self) -> bool {
        self.drive_all_rows();
        let down = self.any_column_asserted();
        self.release_rows();
        down
    }

    fn decode_pressed_key(&mut self) -> KeyCode {
        let mut row = ROWS - 1;
        for r in 0..ROWS {
            self.drive_only(r);
            if self.any_column_asserted() {
                row = r;
                break;
            }
        }

        // The matched row (or the last one scanned) is still driven here.
        let col = (0..COLS - 1)
            .find(|&c| self.column_asserted(c))
            .unwrap_or(COLS - 1);

        self.release_rows();
        KeyCode::at(row, col)
    }

    fn wait_for_key_press(&mut self) -> KeyCode {
        self.wait_until(true);
        self.delay.delay_ms(KEY_DEBOUNCE_MS);

        let key = self.decode_pressed_key();

        self.wait_until(false);
        self.delay.delay_ms(KEY_DEBOUNCE_MS);

        debug!("Keypad: key {}", key.0);
        key
    }
}
