//! Button sampling task
//!
//! Drives the remote controller once per tick: sample the three buttons,
//! debounce, resolve, and queue the resulting command for transmission.
//! The tick period sets both the debounce latency (two ticks) and the
//! watchdog refresh cadence on the screen side.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker};

use rollo_core::remote::RemoteController;
use rollo_core::traits::InputPin;

use crate::channels::COMMAND_CHANNEL;

/// Tick interval in milliseconds
///
/// 20 ms gives a 40 ms debounce latency and a 50 Hz refresh stream,
/// orders of magnitude inside the screen side's 8 s watchdog.
pub const TICK_INTERVAL_MS: u32 = 20;

/// Active-low button presented as a logical switch line
///
/// The buttons pull the line to ground when pressed; the sampler wants
/// `is_high` to mean "asserted".
struct Button(Input<'static>);

impl InputPin for Button {
    fn is_high(&self) -> bool {
        self.0.is_low()
    }
}

/// Button task - samples, debounces, and resolves commands
#[embassy_executor::task]
pub async fn buttons_task(
    up: Input<'static>,
    down: Input<'static>,
    stop: Input<'static>,
    mut led: Output<'static>,
) {
    info!("Button task started");

    let mut remote = RemoteController::new(Button(up), Button(down), Button(stop));
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        match remote.poll() {
            Some(emission) => {
                if emission.repeated {
                    trace!("refresh {:?}", emission.command);
                } else {
                    debug!("command {:?}", emission.command);
                }

                led.set_high();

                // Drop rather than block: the TX task drains faster than
                // one emission per tick unless the wire is wedged, and a
                // lost refresh is covered by the next tick
                if COMMAND_CHANNEL.try_send(emission).is_err() {
                    warn!("command channel full, dropping {:?}", emission.command);
                }
            }
            None => {
                led.set_low();
            }
        }
    }
}
