//! Rollo - Screen Controller Firmware
//!
//! Slave node for the motorized roller screen. Receives single-byte
//! commands from the button remote over SPI (a PIO state machine acts as
//! the slave receiver), drives the motor through two interlocked
//! direction outputs, and force-stops the motor when the command stream
//! goes quiet for longer than the watchdog threshold.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use {defmt_rtt as _, panic_probe as _};

use crate::spi_slave::SpiSlaveRx;

mod channels;
mod spi_slave;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rollo screen controller starting...");

    let p = embassy_rp::init(Default::default());

    // PIO-based SPI slave receiver
    // MOSI/SCK/CS must be consecutive GPIOs (the PIO program addresses
    // them relative to the input base)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let link_rx = SpiSlaveRx::new(&mut common, sm0, p.PIN_16, p.PIN_17, p.PIN_18);

    info!("SPI slave receiver initialized");

    // Motor direction outputs, both inactive at power-up
    let motor_up = Output::new(p.PIN_14, Level::Low);
    let motor_down = Output::new(p.PIN_15, Level::Low);

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::link_rx_task(link_rx)).unwrap();
    spawner.spawn(tasks::controller_task(motor_up, motor_down)).unwrap();

    info!("All tasks spawned, screen controller running");
}
