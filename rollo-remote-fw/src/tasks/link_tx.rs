//! Link transmit task
//!
//! Drains resolved commands into the SPI link, one byte per select
//! window. A transfer fault is logged and the byte dropped; the screen
//! controller's watchdog is the recovery path.

use defmt::*;

use crate::channels::COMMAND_CHANNEL;
use crate::link::SpiCommandLink;

/// Link TX task - sends each queued command to the screen controller
#[embassy_executor::task]
pub async fn link_tx_task(mut link: SpiCommandLink) {
    info!("Link TX task started");

    loop {
        let emission = COMMAND_CHANNEL.receive().await;

        match link.send(emission.command).await {
            Ok(()) => {
                if !emission.repeated {
                    debug!("sent {:?}", emission.command);
                }
            }
            Err(e) => {
                warn!("transfer fault {:?}, dropped {:?}", e, emission.command);
            }
        }
    }
}
