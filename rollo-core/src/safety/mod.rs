//! Safety cutoff
//!
//! The command watchdog is the only recovery mechanism for a lost stop
//! command or a remote that went silent mid-travel.

pub mod watchdog;

pub use watchdog::{CommandWatchdog, WatchdogConfig};
