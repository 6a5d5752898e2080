//! Rollo - Button Remote Firmware
//!
//! Remote node for the motorized roller screen. Samples the three
//! buttons (raise, lower, stop) on a fixed tick, resolves them into
//! single-byte commands, and sends them to the screen controller as SPI
//! master. Active commands are re-sent every tick so the screen side's
//! watchdog stays fed for the whole travel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use {defmt_rtt as _, panic_probe as _};

use crate::link::{SpiCommandLink, SpiLinkConfig};

mod channels;
mod link;
mod tasks;

/// SPI clock for the command link
///
/// A byte at 500 kHz takes 16 µs, comfortably inside one 20 ms tick.
const LINK_FREQUENCY_HZ: u32 = 500_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rollo remote starting...");

    let p = embassy_rp::init(Default::default());

    // Buttons are wired active-low with pull-ups; the task wrapper
    // presents them active-high to the sampler.
    let up = Input::new(p.PIN_2, Pull::Up);
    let down = Input::new(p.PIN_3, Pull::Up);
    let stop = Input::new(p.PIN_4, Pull::Up);

    // Activity LED, lit while a command is being emitted
    let led = Output::new(p.PIN_25, Level::Low);

    // SPI master for the command link (TX only, chip select by hand so
    // one select window frames exactly one command byte)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = LINK_FREQUENCY_HZ;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let link = SpiCommandLink::new(spi, cs, SpiLinkConfig::default());

    info!("SPI link initialized");

    spawner.spawn(tasks::buttons_task(up, down, stop, led)).unwrap();
    spawner.spawn(tasks::link_tx_task(link)).unwrap();

    info!("All tasks spawned, remote running");
}
