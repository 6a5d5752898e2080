//! Switch sampling and command resolution
//!
//! The remote's input pipeline: raw switch readings are debounced across
//! consecutive ticks, then resolved into at most one command per tick.

pub mod debounce;
pub mod resolver;

pub use debounce::{SwitchDebouncer, SwitchState};
pub use resolver::{resolve, CommandResolver, Emission};
