//! User interface subsystem - 4x4 keypad + character display.
//!
//! The edit state machine in [`crate::app`] moves between the menu
//! contexts below. Raw key codes are translated into a [`MenuAction`] at
//! the boundary of each context, so the same physical key can mean
//! "increment" in an editor and "ignored" in a menu.
//!
//! ## Components
//!
//! - **Keypad**: 4x4 matrix, row scan with debounced press/release
//! - **Screens**: fixed text layouts for the 16x2 display

pub mod input_logic;
pub mod keypad;
pub mod screens;

use crate::clock::ClockSnapshot;
use crate::config::{
    FIELD_MENU_ITEMS, KEYMAP, KEY_CONFIRM, KEY_DECREMENT, KEY_INCREMENT, TOP_MENU_ITEMS,
};
use input_logic::{wrap_next, wrap_prev};

/// Logical key code produced by the keypad decoder (0-16, see `KEYMAP`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u8);

impl KeyCode {
    /// Code at a matrix intersection. Out-of-range indices saturate to the
    /// last row/column.
    pub fn at(row: usize, col: usize) -> Self {
        Self(KEYMAP[row.min(3)][col.min(3)])
    }

    /// What this key means in `context`.
    pub fn action_in(self, context: MenuContext) -> MenuAction {
        let menu_items = match context {
            MenuContext::Monitoring => return MenuAction::Ignored,
            MenuContext::FieldEdit(_) | MenuContext::SetpointEdit => {
                return match self.0 {
                    KEY_INCREMENT => MenuAction::Increment,
                    KEY_DECREMENT => MenuAction::Decrement,
                    KEY_CONFIRM => MenuAction::Confirm,
                    _ => MenuAction::Ignored,
                };
            }
            MenuContext::TopMenu => TOP_MENU_ITEMS,
            MenuContext::TimeFieldMenu => FIELD_MENU_ITEMS,
        };

        if (1..=menu_items).contains(&self.0) {
            MenuAction::Select(self.0)
        } else {
            MenuAction::Ignored
        }
    }
}

/// Abstract meaning of a key press in the active context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    Increment,
    Decrement,
    Confirm,
    /// Menu option `n` (1-based).
    Select(u8),
    Ignored,
}

/// Which part of the UI is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuContext {
    /// Live clock + temperature view with alert logging.
    Monitoring,
    /// `1.EDIT RTC INFO  2.E.SET  3.EXT`
    TopMenu,
    /// Pick one of the seven clock fields, or 8 to leave.
    TimeFieldMenu,
    /// Incrementing/decrementing one clock field.
    FieldEdit(Field),
    /// Incrementing/decrementing the alarm setpoint.
    SetpointEdit,
}

/// Editable clock fields, in field-menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hour,
    Minute,
    Second,
    Date,
    Month,
    Year,
    Weekday,
}

impl Field {
    /// Current value of this field in `snapshot`.
    pub fn read(self, snapshot: &ClockSnapshot) -> i32 {
        match self {
            Field::Hour => snapshot.hour as i32,
            Field::Minute => snapshot.minute as i32,
            Field::Second => snapshot.second as i32,
            Field::Date => snapshot.day as i32,
            Field::Month => snapshot.month as i32,
            Field::Year => snapshot.year as i32,
            Field::Weekday => snapshot.weekday as i32,
        }
    }

    /// One step up. Bounded fields wrap at their natural modulus; the day
    /// of month is folded by the editor against the month length.
    pub fn increment(self, value: i32) -> i32 {
        match self {
            Field::Hour => wrap_next(value, 0, 23),
            Field::Minute | Field::Second => wrap_next(value, 0, 59),
            Field::Month => wrap_next(value, 1, 12),
            Field::Weekday => wrap_next(value, 0, 6),
            Field::Date => value + 1,
            Field::Year => (value + 1).min(u16::MAX as i32),
        }
    }

    /// One step down, mirroring [`Field::increment`].
    pub fn decrement(self, value: i32) -> i32 {
        match self {
            Field::Hour => wrap_prev(value, 0, 23),
            Field::Minute | Field::Second => wrap_prev(value, 0, 59),
            Field::Month => wrap_prev(value, 1, 12),
            Field::Weekday => wrap_prev(value, 0, 6),
            Field::Date => value - 1,
            Field::Year => (value - 1).max(0),
        }
    }

    /// Field for a field-menu option (1-7).
    pub fn from_menu_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(Field::Hour),
            2 => Some(Field::Minute),
            3 => Some(Field::Second),
            4 => Some(Field::Date),
            5 => Some(Field::Month),
            6 => Some(Field::Year),
            7 => Some(Field::Weekday),
            _ => None,
        }
    }

    /// Editor heading shown on the first display line.
    pub fn title(self) -> &'static str {
        match self {
            Field::Hour => "SET HOUR:",
            Field::Minute => "SET MIN:",
            Field::Second => "SET SEC:",
            Field::Date => "SET DATE:",
            Field::Month => "SET MON:",
            Field::Year => "SET YEAR:",
            Field::Weekday => "SET DAY:",
        }
    }
}
