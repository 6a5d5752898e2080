//! Screen controller node
//!
//! Owns the motor drive, the command watchdog, and the last-command
//! marker. The firmware feeds it two kinds of events: a received link
//! byte and the periodic tick. Each handler runs to completion; the
//! owning task processes events one at a time, so no further locking is
//! needed around the motor state.

use rollo_protocol::Command;

use crate::motor::{MotorDrive, MotorState};
use crate::safety::{CommandWatchdog, WatchdogConfig};
use crate::traits::OutputPin;

/// Result of applying one received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// The command the byte decoded to (undecodable bytes become stop)
    pub command: Command,
    /// Motor state after the command
    pub state: MotorState,
    /// True when the command changed the last-command marker
    pub changed: bool,
}

/// Screen controller
///
/// The only writers of the motor state are [`ScreenController::on_byte`]
/// and the watchdog path in [`ScreenController::on_tick`].
pub struct ScreenController<UP: OutputPin, DOWN: OutputPin> {
    motor: MotorDrive<UP, DOWN>,
    watchdog: CommandWatchdog,
    /// Most recently applied command, for transition detection
    last_command: Option<Command>,
}

impl<UP: OutputPin, DOWN: OutputPin> ScreenController<UP, DOWN> {
    /// Create a controller; the motor starts stopped and the marker idle
    pub fn new(up: UP, down: DOWN, watchdog: WatchdogConfig) -> Self {
        Self {
            motor: MotorDrive::new(up, down),
            watchdog: CommandWatchdog::new(watchdog),
            last_command: None,
        }
    }

    /// Handle one byte latched off the link
    ///
    /// Every accepted byte refreshes the watchdog, changed or repeated;
    /// that is what lets a held button sustain motion. Undecodable bytes
    /// are applied as stop.
    pub fn on_byte(&mut self, byte: u8) -> Applied {
        let command = Command::decode_or_stop(byte);
        let changed = self.last_command != Some(command);

        self.watchdog.feed();
        let state = self.motor.apply(command);
        self.last_command = Some(command);

        Applied {
            command,
            state,
            changed,
        }
    }

    /// Handle one periodic tick; returns true if the watchdog fired
    ///
    /// On expiry the motor is forced to stopped regardless of the
    /// last-command marker, and the marker is set to stop so the next
    /// motion byte registers as a transition.
    pub fn on_tick(&mut self) -> bool {
        if self.watchdog.tick() {
            self.motor.force_stop();
            self.last_command = Some(Command::Stop);
            true
        } else {
            false
        }
    }

    /// Current motor state
    pub fn motor_state(&self) -> MotorState {
        self.motor.state()
    }

    /// Most recently applied command
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Ticks elapsed since the last accepted command
    pub fn ticks_since_command(&self) -> u32 {
        self.watchdog.ticks_since_command()
    }
}
