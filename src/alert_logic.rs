/// Which side of the setpoint a reading falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertLevel {
    /// At or below the setpoint.
    Normal,
    /// Strictly above the setpoint.
    OverTemp,
}

/// Classify a reading against the setpoint. A reading equal to the
/// setpoint is normal.
pub fn classify(celsius: f32, setpoint: u32) -> AlertLevel {
    if celsius > setpoint as f32 {
        AlertLevel::OverTemp
    } else {
        AlertLevel::Normal
    }
}

/// Limits the serial log to one line per clock second for each level.
///
/// The two levels remember their last logged second independently, so
/// crossing the setpoint back and forth within one second logs each level
/// at most once.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogGate {
    last_normal: Option<u8>,
    last_alert: Option<u8>,
}

impl LogGate {
    pub const fn new() -> Self {
        Self {
            last_normal: None,
            last_alert: None,
        }
    }

    /// Returns `true` (and records `second`) if a line for `level` has not
    /// been logged yet during `second`.
    pub fn admit(&mut self, level: AlertLevel, second: u8) -> bool {
        let last = match level {
            AlertLevel::Normal => &mut self.last_normal,
            AlertLevel::OverTemp => &mut self.last_alert,
        };
        if *last == Some(second) {
            false
        } else {
            *last = Some(second);
            true
        }
    }
}
