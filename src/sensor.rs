//! LM35 analog temperature sensor scaling.
//!
//! The LM35 outputs 10 mV per degree Celsius. The ADC driver hands us raw
//! counts; this module turns them into degrees.

use crate::config::LM35_MV_PER_DEGREE;

/// Convert a raw ADC sample to degrees Celsius.
///
/// `full_scale_mv` is the input voltage that reads as `max_count`.
/// Negative samples (SAADC offset noise around 0 V) clamp to 0 °C.
pub fn lm35_celsius(counts: i32, full_scale_mv: f32, max_count: f32) -> f32 {
    let counts = counts.max(0) as f32;
    let millivolts = counts * full_scale_mv / max_count;
    millivolts / LM35_MV_PER_DEGREE
}
