//! Motor direction drive
//!
//! The screen motor is wired through two direction outputs; at most one
//! may be active at any instant.

pub mod drive;

pub use drive::{MotorDrive, MotorState};
