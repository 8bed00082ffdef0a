/// Step a value up by one, wrapping from `max` back to `min`.
pub fn wrap_next(value: i32, min: i32, max: i32) -> i32 {
    if value >= max {
        min
    } else {
        value + 1
    }
}

/// Step a value down by one, wrapping from `min` back to `max`.
pub fn wrap_prev(value: i32, min: i32, max: i32) -> i32 {
    if value <= min {
        max
    } else {
        value - 1
    }
}

/// Raise the setpoint; no ceiling beyond the integer range.
pub fn setpoint_up(setpoint: u32) -> u32 {
    setpoint.saturating_add(1)
}

/// Lower the setpoint, stopping at zero.
pub fn setpoint_down(setpoint: u32) -> u32 {
    setpoint.saturating_sub(1)
}
