//! Main controller task
//!
//! Owns the screen controller object and is the only writer of the motor
//! outputs. Processes one event at a time (a received byte or a
//! watchdog tick), preserving the run-to-completion semantics the node
//! logic assumes.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;

use rollo_core::safety::WatchdogConfig;
use rollo_core::screen::ScreenController;
use rollo_core::traits::OutputPin;

use crate::channels::{RX_BYTE_CHANNEL, TICK_SIGNAL};

/// Motor direction output presented as a logical pin
///
/// The relay drivers on the reference board are active-high; boards that
/// invert belong here, not in the node logic.
struct MotorPin(Output<'static>);

impl OutputPin for MotorPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Controller task - decodes commands and drives the motor
#[embassy_executor::task]
pub async fn controller_task(motor_up: Output<'static>, motor_down: Output<'static>) {
    info!("Controller task started");

    let mut controller = ScreenController::new(
        MotorPin(motor_up),
        MotorPin(motor_down),
        WatchdogConfig::default(),
    );

    info!("Screen controller ready");

    loop {
        match select(RX_BYTE_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(byte) => {
                let applied = controller.on_byte(byte);
                if applied.changed {
                    debug!("command {:?} -> {:?}", applied.command, applied.state);
                } else {
                    trace!("refresh {:?}", applied.command);
                }
            }
            Either::Second(()) => {
                if controller.on_tick() {
                    warn!("command timeout, motor force-stopped");
                }
            }
        }
    }
}
