//! Link receive task
//!
//! Pulls bytes out of the PIO slave receiver and hands them to the
//! controller task in arrival order.

use defmt::*;
use embassy_rp::peripherals::PIO0;

use crate::channels::RX_BYTE_CHANNEL;
use crate::spi_slave::SpiSlaveRx;

/// Link RX task - receives command bytes from the remote
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: SpiSlaveRx<'static, PIO0, 0>) {
    info!("Link RX task started");

    loop {
        let byte = rx.read_byte().await;
        trace!("RX byte {=u8:#x}", byte);

        // Drop rather than block: a lost refresh is re-sent one remote
        // tick later, and the watchdog covers the pathological case
        if RX_BYTE_CHANNEL.try_send(byte).is_err() {
            warn!("RX channel full, dropping byte");
        }
    }
}
