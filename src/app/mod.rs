//! Monitor loop and keypad-driven edit state machine.
//!
//! [`Station`] owns every collaborator and runs forever:
//!
//! 1. **Monitoring** - show clock + temperature, drive the alert LED and
//!    log at most one line per clock second for each alert level.
//! 2. **Editing** - a falling edge on the edit button (confirmed after a
//!    debounce) suspends monitoring and runs the nested menus in
//!    [`edit`] until the user picks "exit" from the top menu.
//!
//! Single thread, blocking waits only. Collaborator failures are logged
//! and the loop carries on.

mod edit;


use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::alert_logic::{classify, AlertLevel, LogGate};
use crate::config::{DEFAULT_SETPOINT_C, EDIT_BUTTON_DEBOUNCE_MS, MONITOR_PERIOD_MS};
use crate::error::Error;
use crate::io::{CharDisplay, ClockStore, LogSink, TemperatureSensor};
use crate::log_line;
use crate::ui::keypad::Keypad;
use crate::ui::screens;

/// Everything the station drives, handed over once at start-up.
pub struct Parts<KP, LCD, LOG, TS, RTC, LED, BTN, DLY> {
    pub keypad: KP,
    pub display: LCD,
    pub log: LOG,
    pub sensor: TS,
    pub clock: RTC,
    /// High = alert on.
    pub alert_led: LED,
    /// Active-low push button that opens the edit menu.
    pub edit_button: BTN,
    pub delay: DLY,
}

/// The temperature monitoring station.
pub struct Station<KP, LCD, LOG, TS, RTC, LED, BTN, DLY> {
    keypad: KP,
    display: LCD,
    log: LOG,
    sensor: TS,
    clock: RTC,
    alert_led: LED,
    edit_button: BTN,
    delay: DLY,
    setpoint: u32,
    gate: LogGate,
    button_was_down: bool,
}

impl<KP, LCD, LOG, TS, RTC, LED, BTN, DLY> Station<KP, LCD, LOG, TS, RTC, LED, BTN, DLY>
where
    KP: Keypad,
    LCD: CharDisplay,
    LOG: LogSink,
    TS: TemperatureSensor,
    RTC: ClockStore,
    LED: OutputPin,
    BTN: InputPin,
    DLY: DelayNs,
{
    /// Build the station with the power-up setpoint.
    pub fn new(parts: Parts<KP, LCD, LOG, TS, RTC, LED, BTN, DLY>) -> Self {
        Self {
            keypad: parts.keypad,
            display: parts.display,
            log: parts.log,
            sensor: parts.sensor,
            clock: parts.clock,
            alert_led: parts.alert_led,
            edit_button: parts.edit_button,
            delay: parts.delay,
            setpoint: DEFAULT_SETPOINT_C,
            gate: LogGate::new(),
            button_was_down: false,
        }
    }

    /// Alarm setpoint in whole degrees Celsius.
    pub fn setpoint(&self) -> u32 {
        self.setpoint
    }

    /// Run forever: startup banner, then monitor and edit on request.
    pub fn run(mut self) -> ! {
        self.announce_startup();
        loop {
            self.monitor_once();
            if self.edit_requested() {
                self.edit_session();
            }
            self.delay.delay_ms(MONITOR_PERIOD_MS);
        }
    }

    /// Log the power-up banner with one temperature reading.
    pub fn announce_startup(&mut self) {
        info!("Station: setpoint {} C", self.setpoint);
        match self.sensor.read_celsius() {
            Ok(celsius) => match log_line::startup(celsius) {
                Ok(line) => self.log_text(&line),
                Err(e) => warn!("Startup line: {}", e),
            },
            Err(e) => warn!("Startup reading failed: {}", e),
        }
    }

    /// One monitoring pass. Returns the alert level, or `None` if the
    /// sensor could not be read.
    pub fn monitor_once(&mut self) -> Option<AlertLevel> {
        let now = self.clock.now();
        let celsius = match self.sensor.read_celsius() {
            Ok(c) => c,
            Err(e) => {
                warn!("Sensor read failed: {}", e);
                return None;
            }
        };

        let drawn = screens::draw_home(&mut self.display, &now, celsius);
        self.check_display(drawn);

        let level = classify(celsius, self.setpoint);
        let _ = match level {
            AlertLevel::Normal => self.alert_led.set_low(),
            AlertLevel::OverTemp => self.alert_led.set_high(),
        };

        if self.gate.admit(level, now.second) {
            match log_line::reading(level, celsius, &now) {
                Ok(line) => self.log_text(&line),
                Err(e) => warn!("Reading line: {}", e),
            }
        }

        Some(level)
    }

    /// True once per press of the edit button: on a released-to-pressed
    /// transition that is still pressed after the debounce interval.
    pub fn edit_requested(&mut self) -> bool {
        let down = self.edit_button_down();
        let pressed_now = down && !self.button_was_down;
        self.button_was_down = down;
        if !pressed_now {
            return false;
        }

        self.delay.delay_ms(EDIT_BUTTON_DEBOUNCE_MS);
        let confirmed = self.edit_button_down();
        self.button_was_down = confirmed;
        if confirmed {
            info!("Station: edit button");
        }
        confirmed
    }

    fn edit_button_down(&mut self) -> bool {
        self.edit_button.is_low().unwrap_or(false)
    }

    fn log_text(&mut self, text: &str) {
        if let Err(e) = self.log.write_str(text) {
            warn!("Serial log failed: {}", e);
        }
    }

    fn check_display(&mut self, result: Result<(), Error>) {
        if let Err(e) = result {
            warn!("Display update failed: {}", e);
        }
    }
}
