//! Remote node controller
//!
//! Owns the three button inputs and the sampling pipeline. The firmware's
//! tick task calls [`RemoteController::poll`] once per tick and hands any
//! emission to the link; everything stateful lives here so the whole node
//! runs on the host under test.

use rollo_protocol::Command;

use crate::input::{CommandResolver, Emission, SwitchDebouncer, SwitchState};
use crate::traits::InputPin;

/// Button remote controller
///
/// One instance per node, owned by the task that drives the tick. Pins
/// present logical levels; wiring polarity is handled by the firmware's
/// pin wrappers.
pub struct RemoteController<UP, DOWN, STOP>
where
    UP: InputPin,
    DOWN: InputPin,
    STOP: InputPin,
{
    up: UP,
    down: DOWN,
    stop: STOP,
    debouncer: SwitchDebouncer,
    resolver: CommandResolver,
}

impl<UP, DOWN, STOP> RemoteController<UP, DOWN, STOP>
where
    UP: InputPin,
    DOWN: InputPin,
    STOP: InputPin,
{
    /// Create a new controller for the three buttons
    pub fn new(up: UP, down: DOWN, stop: STOP) -> Self {
        Self {
            up,
            down,
            stop,
            debouncer: SwitchDebouncer::new(),
            resolver: CommandResolver::new(),
        }
    }

    /// Sample the buttons for one tick and resolve a command to transmit
    ///
    /// Returns `None` while the reading is unstable or idle; at most one
    /// emission is produced per tick.
    pub fn poll(&mut self) -> Option<Emission> {
        let raw = SwitchState {
            up: self.up.is_high(),
            down: self.down.is_high(),
            stop: self.stop.is_high(),
        };

        let stable = self.debouncer.sample(raw)?;
        self.resolver.poll(stable)
    }

    /// The most recently resolved symbol (`None` = idle)
    pub fn last_command(&self) -> Option<Command> {
        self.resolver.last_command()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Switch input whose level the test scripts from outside
    struct ScriptedPin<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for ScriptedPin<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    struct Buttons {
        up: Cell<bool>,
        down: Cell<bool>,
        stop: Cell<bool>,
    }

    impl Buttons {
        fn new() -> Self {
            Self {
                up: Cell::new(false),
                down: Cell::new(false),
                stop: Cell::new(false),
            }
        }

        fn controller(
            &self,
        ) -> RemoteController<ScriptedPin<'_>, ScriptedPin<'_>, ScriptedPin<'_>> {
            RemoteController::new(
                ScriptedPin { level: &self.up },
                ScriptedPin { level: &self.down },
                ScriptedPin { level: &self.stop },
            )
        }
    }

    #[test]
    fn test_idle_remote_stays_silent() {
        let buttons = Buttons::new();
        let mut remote = buttons.controller();

        for _ in 0..4 {
            assert_eq!(remote.poll(), None);
        }
        assert_eq!(remote.last_command(), None);
    }

    #[test]
    fn test_press_needs_two_ticks() {
        let buttons = Buttons::new();
        let mut remote = buttons.controller();
        remote.poll();
        remote.poll();

        buttons.up.set(true);
        assert_eq!(remote.poll(), None); // first sample of the new level

        let emission = remote.poll().unwrap();
        assert_eq!(emission.command, Command::Up);
        assert!(!emission.repeated);
        assert_eq!(remote.last_command(), Some(Command::Up));
    }

    #[test]
    fn test_held_button_refreshes() {
        let buttons = Buttons::new();
        let mut remote = buttons.controller();
        buttons.down.set(true);
        remote.poll();
        remote.poll();

        for _ in 0..3 {
            let emission = remote.poll().unwrap();
            assert_eq!(emission.command, Command::Down);
            assert!(emission.repeated);
        }
    }

    #[test]
    fn test_stop_wins_while_moving() {
        let buttons = Buttons::new();
        let mut remote = buttons.controller();
        buttons.up.set(true);
        remote.poll();
        remote.poll();

        buttons.stop.set(true); // up still held
        remote.poll();
        let emission = remote.poll().unwrap();
        assert_eq!(emission.command, Command::Stop);
        assert!(!emission.repeated);
    }

    #[test]
    fn test_release_goes_silent() {
        let buttons = Buttons::new();
        let mut remote = buttons.controller();
        buttons.up.set(true);
        remote.poll();
        remote.poll();

        buttons.up.set(false);
        assert_eq!(remote.poll(), None); // unstable tick
        assert_eq!(remote.poll(), None); // stable idle, nothing emitted
        assert_eq!(remote.last_command(), None);
    }
}
