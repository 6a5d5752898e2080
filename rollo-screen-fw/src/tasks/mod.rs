//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod link_rx;
pub mod tick;

pub use controller::controller_task;
pub use link_rx::link_rx_task;
pub use tick::tick_task;
