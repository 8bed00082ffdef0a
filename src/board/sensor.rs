//! LM35 on SAADC channel 0.

use embassy_futures::block_on;
use embassy_nrf::saadc::Saadc;
use tempmon::config::{ADC_FULL_SCALE_MV, ADC_MAX_COUNT};
use tempmon::sensor::lm35_celsius;
use tempmon::{Error, TemperatureSensor};

pub struct Lm35<'d> {
    adc: Saadc<'d, 1>,
}

impl<'d> Lm35<'d> {
    /// Calibrate the SAADC offset once, then hand it over.
    pub fn new(mut adc: Saadc<'d, 1>) -> Self {
        block_on(adc.calibrate());
        Self { adc }
    }
}

impl TemperatureSensor for Lm35<'_> {
    fn read_celsius(&mut self) -> Result<f32, Error> {
        let mut buf = [0i16; 1];
        block_on(self.adc.sample(&mut buf));
        Ok(lm35_celsius(
            i32::from(buf[0]),
            ADC_FULL_SCALE_MV,
            ADC_MAX_COUNT,
        ))
    }
}
