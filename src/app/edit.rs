//! Nested edit menus.
//!
//! ```text
//!  TopMenu ──1──▶ TimeFieldMenu ──1..7──▶ FieldEdit(field)
//!     │  ▲            │   ▲                     │
//!     │  └─────8──────┘   └───────confirm───────┘
//!     ├──2──▶ SetpointEdit ──confirm──▶ TopMenu
//!     └──3──▶ Monitoring
//! ```
//!
//! Menus block on debounced key presses. Field editors poll the raw key
//! state every `EDITOR_REPEAT_MS` so a held key auto-repeats. Edits are
//! made on a working value and written to the clock store only on confirm.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::Station;
use crate::clock::{validate_day, wrap_day};
use crate::config::{EDITOR_REPEAT_MS, INVALID_DATE_HOLD_MS, MENU_SETTLE_MS};
use crate::io::{CharDisplay, ClockStore, LogSink, TemperatureSensor};
use crate::log_line;
use crate::ui::input_logic::{setpoint_down, setpoint_up};
use crate::ui::keypad::Keypad;
use crate::ui::{screens, Field, MenuAction, MenuContext};

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
    /// Run the edit menus until the user leaves through the top menu.
    pub fn edit_session(&mut self) {
        let mut context = MenuContext::TopMenu;
        let mut time_menu_announced = false;

        while context != MenuContext::Monitoring {
            let next = match context {
                MenuContext::TopMenu => self.top_menu(),
                MenuContext::TimeFieldMenu => self.time_field_menu(&mut time_menu_announced),
                MenuContext::FieldEdit(field) => self.edit_field(field),
                MenuContext::SetpointEdit => self.edit_setpoint(),
                MenuContext::Monitoring => MenuContext::Monitoring,
            };
            if context == MenuContext::TopMenu {
                time_menu_announced = false;
            }
            debug!("Edit: {} -> {}", context, next);
            context = next;
        }

        let cleared = self.display.clear();
        self.check_display(cleared);
        info!("Edit: back to monitoring");
    }

    fn top_menu(&mut self) -> MenuContext {
        let drawn = screens::draw_top_menu(&mut self.display);
        self.check_display(drawn);
        self.log_text(log_line::EDIT_MODE_BANNER);

        loop {
            self.delay.delay_ms(MENU_SETTLE_MS);
            let key = self.keypad.wait_for_key_press();
            match key.action_in(MenuContext::TopMenu) {
                MenuAction::Select(1) => return MenuContext::TimeFieldMenu,
                MenuAction::Select(2) => return MenuContext::SetpointEdit,
                MenuAction::Select(3) => return MenuContext::Monitoring,
                _ => {
                    debug!("Edit: top menu redraw on key {}", key.0);
                    let drawn = screens::draw_top_menu(&mut self.display);
                    self.check_display(drawn);
                }
            }
        }
    }

    fn time_field_menu(&mut self, announced: &mut bool) -> MenuContext {
        loop {
            let drawn = screens::draw_field_menu(&mut self.display);
            self.check_display(drawn);
            if !*announced {
                self.log_text(log_line::TIME_EDIT_BANNER);
                *announced = true;
            }

            let key = self.keypad.wait_for_key_press();
            match key.action_in(MenuContext::TimeFieldMenu) {
                MenuAction::Select(8) => return MenuContext::TopMenu,
                MenuAction::Select(option) => {
                    if let Some(field) = Field::from_menu_option(option) {
                        return MenuContext::FieldEdit(field);
                    }
                }
                _ => debug!("Edit: field menu ignored key {}", key.0),
            }
        }
    }

    fn edit_field(&mut self, field: Field) -> MenuContext {
        let working = self.clock.now();
        let mut value = field.read(&working);

        let drawn = screens::draw_field_editor(&mut self.display, field);
        self.check_display(drawn);

        loop {
            if let Some(key) = self.keypad.poll_key() {
                match key.action_in(MenuContext::FieldEdit(field)) {
                    MenuAction::Increment => value = field.increment(value),
                    MenuAction::Decrement => value = field.decrement(value),
                    MenuAction::Confirm => {
                        self.commit_field(field, value);
                        return MenuContext::TimeFieldMenu;
                    }
                    _ => {}
                }
            }

            if field == Field::Date {
                value = wrap_day(value, working.month, working.year);
            }

            let drawn = screens::draw_field_value(&mut self.display, field, value);
            self.check_display(drawn);
            self.delay.delay_ms(EDITOR_REPEAT_MS);
        }
    }

    /// Write one edited field over the clock store's current contents.
    pub(super) fn commit_field(&mut self, field: Field, value: i32) {
        let now = self.clock.now();
        let byte = value.clamp(0, u8::MAX as i32) as u8;

        match field {
            Field::Hour => self.clock.set_time(byte, now.minute, now.second),
            Field::Minute => self.clock.set_time(now.hour, byte, now.second),
            Field::Second => self.clock.set_time(now.hour, now.minute, byte),
            Field::Date => match validate_day(value, now.month, now.year) {
                Ok(day) => {
                    self.clock.set_date(day, now.month, now.year);
                    self.log_text(log_line::DATE_UPDATED);
                }
                Err(e) => {
                    warn!("Edit: date rejected: {}", e);
                    let drawn = screens::draw_invalid_date(&mut self.display);
                    self.check_display(drawn);
                    self.log_text(log_line::INVALID_DATE_WARNING);
                    self.delay.delay_ms(INVALID_DATE_HOLD_MS);
                    return;
                }
            },
            Field::Month => self.clock.set_date(now.day, byte, now.year),
            Field::Year => {
                let year = value.clamp(0, u16::MAX as i32) as u16;
                self.clock.set_date(now.day, now.month, year);
            }
            Field::Weekday => self.clock.set_weekday(byte),
        }
        info!("Edit: {} set to {}", field, value);
    }

    fn edit_setpoint(&mut self) -> MenuContext {
        let drawn = screens::draw_setpoint_editor(&mut self.display, self.setpoint);
        self.check_display(drawn);
        self.log_text(log_line::SETPOINT_EDIT_BANNER);

        loop {
            let key = self.keypad.wait_for_key_press();
            match key.action_in(MenuContext::SetpointEdit) {
                MenuAction::Increment => self.setpoint = setpoint_up(self.setpoint),
                MenuAction::Decrement => self.setpoint = setpoint_down(self.setpoint),
                MenuAction::Confirm => {
                    info!("Edit: setpoint {} C", self.setpoint);
                    return MenuContext::TopMenu;
                }
                _ => {}
            }

            let drawn = screens::draw_setpoint_value(&mut self.display, self.setpoint);
            self.check_display(drawn);
            self.delay.delay_ms(EDITOR_REPEAT_MS);
        }
    }
}
