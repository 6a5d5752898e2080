//! SPI command link (master side)
//!
//! One command byte per transfer, framed by a manually driven chip
//! select. The wait for transfer completion is bounded by a deadline: a
//! wedged wire must never stall the remote, and a dropped byte needs no
//! recovery here; the screen controller's watchdog stops the motor if
//! commands stop arriving.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{with_timeout, Duration};

use rollo_protocol::Command;

/// Errors that can occur on the command link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Transfer did not complete within the deadline
    Timeout,
    /// SPI peripheral reported a bus error
    Bus,
}

/// Command link configuration
#[derive(Debug, Clone, Copy)]
pub struct SpiLinkConfig {
    /// Maximum time to wait for one byte to be latched
    ///
    /// Must be well under the button task's tick so transfers can never
    /// overlap.
    pub transfer_deadline: Duration,
}

impl Default for SpiLinkConfig {
    fn default() -> Self {
        Self {
            transfer_deadline: Duration::from_millis(5),
        }
    }
}

/// Master side of the command link
pub struct SpiCommandLink {
    spi: Spi<'static, SPI0, Async>,
    cs: Output<'static>,
    config: SpiLinkConfig,
}

impl SpiCommandLink {
    /// Create the link; chip select must start deasserted (high)
    pub fn new(spi: Spi<'static, SPI0, Async>, cs: Output<'static>, config: SpiLinkConfig) -> Self {
        Self { spi, cs, config }
    }

    /// Transmit one command and wait until the peer has latched it
    ///
    /// The select window frames exactly one byte; it is closed again on
    /// every exit path, including timeout.
    pub async fn send(&mut self, command: Command) -> Result<(), LinkError> {
        let buf = [command.to_byte()];

        self.cs.set_low();
        let result = with_timeout(self.config.transfer_deadline, self.spi.write(&buf)).await;
        self.cs.set_high();

        match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                warn!("SPI bus error: {:?}", Debug2Format(&e));
                Err(LinkError::Bus)
            }
            Err(_) => Err(LinkError::Timeout),
        }
    }
}
