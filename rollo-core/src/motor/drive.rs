//! Direction-output driver with interlock ordering
//!
//! The motor has two control lines, "drive up" and "drive down". Driving
//! both at once would short the winding supplies through the reversing
//! contacts, so every transition deactivates the opposite line before
//! activating the requested one. The ordering is the interlock; there is
//! no other mechanism.

use rollo_protocol::Command;

use crate::traits::OutputPin;

/// Motor drive state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorState {
    /// Both outputs inactive
    #[default]
    Stopped,
    /// "Up" output active, screen raising
    MovingUp,
    /// "Down" output active, screen lowering
    MovingDown,
}

impl MotorState {
    /// Check if the motor is in motion
    pub fn is_moving(&self) -> bool {
        !matches!(self, MotorState::Stopped)
    }

    /// The state a command drives the motor into
    pub fn after(command: Command) -> Self {
        match command {
            Command::Up => MotorState::MovingUp,
            Command::Down => MotorState::MovingDown,
            Command::Stop => MotorState::Stopped,
        }
    }
}

/// Two-output motor drive
///
/// Owns the direction output pins. Commands may arrive in any order,
/// including a direct reversal with no stop in between; `apply` is
/// idempotent, so repeated commands only re-assert the already-set pin
/// states.
pub struct MotorDrive<UP: OutputPin, DOWN: OutputPin> {
    up: UP,
    down: DOWN,
    state: MotorState,
}

impl<UP: OutputPin, DOWN: OutputPin> MotorDrive<UP, DOWN> {
    /// Create a new drive with both outputs deactivated
    pub fn new(mut up: UP, mut down: DOWN) -> Self {
        up.set_low();
        down.set_low();
        Self {
            up,
            down,
            state: MotorState::Stopped,
        }
    }

    /// Drive the outputs for a command
    ///
    /// The opposite output is always deactivated before the requested one
    /// is activated, so the two lines are never active together, even
    /// transiently across a direct reversal.
    pub fn apply(&mut self, command: Command) -> MotorState {
        match command {
            Command::Up => {
                self.down.set_low();
                self.up.set_high();
            }
            Command::Down => {
                self.up.set_low();
                self.down.set_high();
            }
            Command::Stop => {
                self.down.set_low();
                self.up.set_low();
            }
        }
        self.state = MotorState::after(command);
        self.state
    }

    /// Deactivate both outputs unconditionally
    ///
    /// Watchdog path; identical to `apply(Stop)` but named for the caller
    /// that must not depend on command decoding.
    pub fn force_stop(&mut self) {
        self.down.set_low();
        self.up.set_low();
        self.state = MotorState::Stopped;
    }

    /// Current drive state
    pub fn state(&self) -> MotorState {
        self.state
    }
}
