//! tempmon firmware entry point (nRF52840).
//!
//! Brings up the peripherals, wraps them in the board adapters and hands
//! everything to [`Station::run`], which never returns.
//!
//! Hardware:
//!   - 4x4 matrix keypad on P1.01-P1.08
//!   - SSD1306 OLED (128x64) on TWIM0, used as a 16x2 character grid
//!   - LM35 on AIN0 (P0.02)
//!   - Serial log on UARTE0 TX P0.06 at `SERIAL_BAUD`
//!   - Edit push button P0.11 (active-low), alert LED P0.13

#![no_std]
#![no_main]

mod board;

use defmt::info;
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, peripherals, saadc, twim, uarte};
use embassy_time::Delay;
use panic_probe as _; // Panic handler

use tempmon::config::{DEFAULT_CLOCK, SERIAL_BAUD};
use tempmon::{KeyDecoder, Parts, SoftRtc, Station};

use board::clock::Uptime;
use board::display::OledChars;
use board::sensor::Lm35;
use board::serial::{baudrate, SerialLog};

// Fails the build if SERIAL_BAUD has no UARTE divider.
const UART_BAUD: uarte::Baudrate = match baudrate(SERIAL_BAUD) {
    Some(baud) => baud,
    None => panic!("SERIAL_BAUD is not a UARTE rate"),
};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    SAADC => saadc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tempmon starting");

    // Keypad: rows idle high, columns pulled up.
    let rows = [
        Output::new(p.P1_01, Level::High, OutputDrive::Standard),
        Output::new(p.P1_02, Level::High, OutputDrive::Standard),
        Output::new(p.P1_03, Level::High, OutputDrive::Standard),
        Output::new(p.P1_04, Level::High, OutputDrive::Standard),
    ];
    let cols = [
        Input::new(p.P1_05, Pull::Up),
        Input::new(p.P1_06, Pull::Up),
        Input::new(p.P1_07, Pull::Up),
        Input::new(p.P1_08, Pull::Up),
    ];
    let keypad = KeyDecoder::new(rows, cols, Delay);

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = OledChars::init(i2c);

    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = UART_BAUD;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    info!("Serial log at {} baud", SERIAL_BAUD);

    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_12BIT;
    let channel = saadc::ChannelConfig::single_ended(p.P0_02);
    let adc = saadc::Saadc::new(p.SAADC, Irqs, adc_config, [channel]);

    let station = Station::new(Parts {
        keypad,
        display,
        log: SerialLog::new(uart),
        sensor: Lm35::new(adc),
        clock: SoftRtc::new(Uptime, DEFAULT_CLOCK),
        alert_led: Output::new(p.P0_13, Level::Low, OutputDrive::Standard),
        edit_button: Input::new(p.P0_11, Pull::Up),
        delay: Delay,
    });

    station.run()
}
