//! Inter-task communication channels
//!
//! Static channels and signals connecting the receive, tick, and
//! controller tasks, using embassy-sync primitives.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Channel capacity for received link bytes
///
/// The remote sends at most one byte per 20 ms; eight slots of slack is
/// plenty. Overflow drops the byte; a lost refresh is re-sent one remote
/// tick later, and in the limit the watchdog stops the motor.
const RX_CHANNEL_SIZE: usize = 8;

/// Bytes latched off the link, in arrival order
pub static RX_BYTE_CHANNEL: Channel<CriticalSectionRawMutex, u8, RX_CHANNEL_SIZE> = Channel::new();

/// Periodic watchdog tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();
