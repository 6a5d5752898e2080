//! Board-agnostic node logic for the Rollo screen remote
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - GPIO seam traits (switch inputs, motor direction outputs)
//! - Debounced switch sampling and command resolution (remote node)
//! - Motor direction drive with output interlock (screen node)
//! - Command watchdog safety cutoff (screen node)
//! - One controller object per node tying the pieces together

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod motor;
pub mod remote;
pub mod safety;
pub mod screen;
pub mod traits;
