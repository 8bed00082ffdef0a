//! Host-side test doubles for the keypad matrix, timing and the board
//! collaborators.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::clock::ClockSnapshot;
use crate::error::Error;
use crate::io::{CharDisplay, ClockStore, LogSink, TemperatureSensor};
use crate::ui::keypad::Keypad;
use crate::ui::KeyCode;

// ════════════════════════════════════════════════════════════════════════
// Timing
// ════════════════════════════════════════════════════════════════════════

/// Delay that advances a shared virtual clock instead of sleeping.
#[derive(Clone, Default)]
pub struct FakeDelay {
    nanos: Rc<Cell<u64>>,
}

impl FakeDelay {
    pub fn now_ms(&self) -> u64 {
        self.nanos.get() / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.nanos.set(self.nanos.get() + u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.nanos.set(self.nanos.get() + u64::from(ms) * 1_000_000);
    }
}

// ════════════════════════════════════════════════════════════════════════
// Keypad matrix
// ════════════════════════════════════════════════════════════════════════

struct Press {
    start_ms: u64,
    end_ms: u64,
    row: usize,
    col: usize,
}

#[derive(Default)]
struct MatrixState {
    row_low: [bool; 4],
    presses: Vec<Press>,
    first_single_row_read_ms: Option<u64>,
}

/// Electrical model of the 4x4 matrix. A column reads low when a key
/// that is down at the current virtual time sits on a row driven low.
#[derive(Clone, Default)]
pub struct Matrix {
    state: Rc<RefCell<MatrixState>>,
    clock: FakeDelay,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a key down forever.
    pub fn hold(&self, row: usize, col: usize) {
        self.pulse(0, u64::MAX, row, col);
    }

    /// Key down during `[start_ms, end_ms)`.
    pub fn pulse(&self, start_ms: u64, end_ms: u64, row: usize, col: usize) {
        self.state.borrow_mut().presses.push(Press {
            start_ms,
            end_ms,
            row,
            col,
        });
    }

    pub fn rows(&self) -> [RowPin; 4] {
        core::array::from_fn(|index| RowPin {
            matrix: self.clone(),
            index,
        })
    }

    pub fn cols(&self) -> [ColPin; 4] {
        core::array::from_fn(|index| ColPin {
            matrix: self.clone(),
            index,
        })
    }

    pub fn delay(&self) -> FakeDelay {
        self.clock.clone()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn all_rows_released(&self) -> bool {
        self.state.borrow().row_low.iter().all(|low| !low)
    }

    /// Virtual time of the first column read taken with a single row driven.
    pub fn first_decode_ms(&self) -> Option<u64> {
        self.state.borrow().first_single_row_read_ms
    }

    fn column_low(&self, col: usize) -> bool {
        let now = self.now_ms();
        let mut state = self.state.borrow_mut();
        let driven = state.row_low.iter().filter(|low| **low).count();
        if driven == 1 && state.first_single_row_read_ms.is_none() {
            state.first_single_row_read_ms = Some(now);
        }
        state.presses.iter().any(|p| {
            p.col == col && state.row_low[p.row] && p.start_ms <= now && now < p.end_ms
        })
    }
}

pub struct RowPin {
    matrix: Matrix,
    index: usize,
}

impl ErrorType for RowPin {
    type Error = Infallible;
}

impl OutputPin for RowPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.matrix.state.borrow_mut().row_low[self.index] = true;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.matrix.state.borrow_mut().row_low[self.index] = false;
        Ok(())
    }
}

pub struct ColPin {
    matrix: Matrix,
    index: usize,
}

impl ErrorType for ColPin {
    type Error = Infallible;
}

impl InputPin for ColPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.matrix.column_low(self.index))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.matrix.column_low(self.index))
    }
}

// ════════════════════════════════════════════════════════════════════════
// Scripted keypad
// ════════════════════════════════════════════════════════════════════════

/// Keypad that replays a script.
///
/// `Some(code)` is a key held for one sample, `None` is an idle sample.
/// Debounced waits skip idle samples; raw polls consume one entry each.
#[derive(Clone, Default)]
pub struct ScriptedKeypad {
    script: Rc<RefCell<VecDeque<Option<u8>>>>,
}

impl ScriptedKeypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue complete press-release cycles.
    pub fn press(&self, codes: &[u8]) -> &Self {
        let mut script = self.script.borrow_mut();
        for &code in codes {
            script.push_back(Some(code));
        }
        drop(script);
        self
    }

    /// Queue `count` idle samples.
    pub fn idle(&self, count: usize) -> &Self {
        let mut script = self.script.borrow_mut();
        for _ in 0..count {
            script.push_back(None);
        }
        drop(script);
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }

    fn next_sample(&self) -> Option<u8> {
        self.script
            .borrow_mut()
            .pop_front()
            .expect("keypad script exhausted")
    }
}

impl Keypad for ScriptedKeypad {
    fn is_any_key_down(&mut self) -> bool {
        matches!(self.script.borrow().front(), Some(Some(_)))
    }

    fn decode_pressed_key(&mut self) -> KeyCode {
        KeyCode(self.next_sample().unwrap_or(16))
    }

    fn wait_for_key_press(&mut self) -> KeyCode {
        loop {
            if let Some(code) = self.next_sample() {
                return KeyCode(code);
            }
        }
    }

    fn poll_key(&mut self) -> Option<KeyCode> {
        self.next_sample().map(KeyCode)
    }
}

// ════════════════════════════════════════════════════════════════════════
// Display, serial, sensor, clock, LED, button
// ════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct Screen {
    grid: [[char; 16]; 2],
    cursor: (usize, usize),
    clears: usize,
}

/// 16x2 character grid that records what was drawn.
#[derive(Clone)]
pub struct FakeDisplay {
    screen: Rc<RefCell<Screen>>,
}

impl Default for FakeDisplay {
    fn default() -> Self {
        let screen = Screen {
            grid: [[' '; 16]; 2],
            ..Default::default()
        };
        Self {
            screen: Rc::new(RefCell::new(screen)),
        }
    }
}

impl FakeDisplay {
    pub fn line(&self, row: usize) -> String {
        self.screen.borrow().grid[row].iter().collect()
    }

    pub fn clears(&self) -> usize {
        self.screen.borrow().clears
    }
}

impl CharDisplay for FakeDisplay {
    fn clear(&mut self) -> Result<(), Error> {
        let mut screen = self.screen.borrow_mut();
        screen.grid = [[' '; 16]; 2];
        screen.cursor = (0, 0);
        screen.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.screen.borrow_mut().cursor = (row as usize, col as usize);
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        let mut screen = self.screen.borrow_mut();
        for ch in text.chars() {
            let (row, col) = screen.cursor;
            if row < 2 && col < 16 {
                screen.grid[row][col] = ch;
            }
            screen.cursor.1 += 1;
        }
        Ok(())
    }
}

/// Serial log that keeps every line written.
#[derive(Clone, Default)]
pub struct FakeLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl FakeLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LogSink for FakeLog {
    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        self.lines.borrow_mut().push(String::from(text));
        Ok(())
    }
}

/// Sensor whose reading the test sets directly.
#[derive(Clone)]
pub struct FakeSensor {
    celsius: Rc<Cell<Option<f32>>>,
}

impl FakeSensor {
    pub fn new(celsius: f32) -> Self {
        Self {
            celsius: Rc::new(Cell::new(Some(celsius))),
        }
    }

    pub fn set(&self, celsius: f32) {
        self.celsius.set(Some(celsius));
    }

    pub fn fail(&self) {
        self.celsius.set(None);
    }
}

impl TemperatureSensor for FakeSensor {
    fn read_celsius(&mut self) -> Result<f32, Error> {
        self.celsius.get().ok_or(Error::Sensor)
    }
}

/// Clock store that only changes when written or when the test ticks it.
#[derive(Clone)]
pub struct FakeClock {
    current: Rc<Cell<ClockSnapshot>>,
}

impl FakeClock {
    pub fn new(initial: ClockSnapshot) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> ClockSnapshot {
        self.current.get()
    }

    pub fn tick(&self) {
        let mut c = self.current.get();
        c.advance_second();
        self.current.set(c);
    }
}

impl ClockStore for FakeClock {
    fn now(&mut self) -> ClockSnapshot {
        self.current.get()
    }

    fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        let mut c = self.current.get();
        c.hour = hour;
        c.minute = minute;
        c.second = second;
        self.current.set(c);
    }

    fn set_date(&mut self, day: u8, month: u8, year: u16) {
        let mut c = self.current.get();
        c.day = day;
        c.month = month;
        c.year = year;
        self.current.set(c);
    }

    fn set_weekday(&mut self, weekday: u8) {
        let mut c = self.current.get();
        c.weekday = weekday;
        self.current.set(c);
    }
}

/// LED output whose level the test can read back.
#[derive(Clone, Default)]
pub struct FakeLed {
    on: Rc<Cell<bool>>,
}

impl FakeLed {
    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl OutputPin for FakeLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.on.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on.set(true);
        Ok(())
    }
}

/// Active-low push button; `true` in the script means pressed.
#[derive(Clone, Default)]
pub struct FakeButton {
    pressed: Rc<Cell<bool>>,
    /// Levels returned by the next reads, before falling back to `pressed`.
    upcoming: Rc<RefCell<VecDeque<bool>>>,
}

impl FakeButton {
    pub fn set_pressed(&self, pressed: bool) {
        self.pressed.set(pressed);
    }

    /// Return these levels for the next reads, then the steady level.
    pub fn queue_levels(&self, levels: &[bool]) {
        self.upcoming.borrow_mut().extend(levels.iter().copied());
    }

    fn level(&self) -> bool {
        self.upcoming
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.pressed.get())
    }
}

impl ErrorType for FakeButton {
    type Error = Infallible;
}

impl InputPin for FakeButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level())
    }
}
