//! Inter-task communication channels
//!
//! Static channels connecting the button sampling task to the link TX
//! task, using embassy-sync primitives.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use rollo_core::input::Emission;

/// Channel capacity for resolved commands
///
/// One emission per tick and one in-flight transfer per tick means the
/// channel stays near-empty; the capacity only absorbs startup jitter.
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Commands resolved by the button task, awaiting transmission
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, Emission, COMMAND_CHANNEL_SIZE> =
    Channel::new();
