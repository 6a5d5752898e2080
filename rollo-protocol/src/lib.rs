//! Command protocol for the Rollo screen remote link
//!
//! This crate defines the SPI-based protocol between the button remote
//! (master) and the screen controller (slave). The protocol is a single
//! byte per transfer:
//!
//! ```text
//! ┌────────┐
//! │ SYMBOL │   'U' = raise, 'D' = lower, 'S' = stop
//! │ 1B     │
//! └────────┘
//! ```
//!
//! There is no addressing, framing, or checksum: the link is a dedicated
//! point-to-point wire, and the receiver treats every byte it cannot decode
//! as a stop command. Loss of a byte is recovered by the screen
//! controller's command watchdog, not by this layer.

#![no_std]
#![deny(unsafe_code)]

pub mod command;

pub use command::{Command, CMD_DOWN, CMD_STOP, CMD_UP};
