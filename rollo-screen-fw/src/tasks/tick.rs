//! Tick task for the command watchdog
//!
//! Provides the periodic tick the controller uses to age the watchdog
//! counter. The tick period is the watchdog's timeout resolution.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::TICK_SIGNAL;

/// Tick interval in milliseconds
///
/// 100 ms ticks against the default 80-tick threshold give the 8 s
/// cutoff covering a full screen travel.
pub const TICK_INTERVAL_MS: u32 = 100;

/// Tick task - sends periodic tick signals
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(());
    }
}
