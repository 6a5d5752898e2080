//! Command resolution with fixed priority
//!
//! Maps a stable switch reading to at most one command per tick. Stop wins
//! over everything; a reading with both direction switches asserted also
//! resolves to stop rather than picking a direction. An idle reading
//! resolves to no command and is never put on the wire; the screen
//! controller's watchdog, not a release event, is what ends a travel.

use rollo_protocol::Command;

use super::debounce::SwitchState;

/// Resolve a stable reading into a command
///
/// Priority order: stop, then the fail-safe for the contradictory up+down
/// combination, then the single directions. `None` is the idle reading.
pub fn resolve(reading: SwitchState) -> Option<Command> {
    if reading.stop {
        Some(Command::Stop)
    } else if reading.up && reading.down {
        // Contradictory request; stopping is the only safe answer
        Some(Command::Stop)
    } else if reading.up {
        Some(Command::Up)
    } else if reading.down {
        Some(Command::Down)
    } else {
        None
    }
}

/// A command the resolver wants transmitted this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Emission {
    /// The command to put on the wire
    pub command: Command,
    /// True when the same command was already emitted last tick
    ///
    /// Repeats exist to refresh the screen controller's watchdog; they are
    /// worth a `trace!`, transitions a `debug!`.
    pub repeated: bool,
}

/// Per-tick command resolution with last-command tracking
///
/// Active commands are re-emitted on every tick they remain resolved, so
/// that sustained motion keeps refreshing the screen controller's
/// watchdog. The idle reading emits nothing, including on the transition
/// into it.
#[derive(Debug, Clone, Default)]
pub struct CommandResolver {
    /// Most recently resolved symbol (`None` = idle)
    last: Option<Command>,
}

impl CommandResolver {
    /// Create a new resolver; the last-command marker starts idle
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one stable reading and decide what to transmit
    pub fn poll(&mut self, reading: SwitchState) -> Option<Emission> {
        let symbol = resolve(reading);
        let repeated = symbol == self.last;
        self.last = symbol;

        symbol.map(|command| Emission { command, repeated })
    }

    /// The most recently resolved symbol (`None` = idle)
    pub fn last_command(&self) -> Option<Command> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(up: bool, down: bool, stop: bool) -> SwitchState {
        SwitchState { up, down, stop }
    }

    #[test]
    fn test_stop_overrides_everything() {
        assert_eq!(resolve(reading(false, false, true)), Some(Command::Stop));
        assert_eq!(resolve(reading(true, false, true)), Some(Command::Stop));
        assert_eq!(resolve(reading(false, true, true)), Some(Command::Stop));
        assert_eq!(resolve(reading(true, true, true)), Some(Command::Stop));
    }

    #[test]
    fn test_single_directions() {
        assert_eq!(resolve(reading(true, false, false)), Some(Command::Up));
        assert_eq!(resolve(reading(false, true, false)), Some(Command::Down));
    }

    #[test]
    fn test_both_directions_fail_safe() {
        assert_eq!(resolve(reading(true, true, false)), Some(Command::Stop));
    }

    #[test]
    fn test_idle_resolves_to_none() {
        assert_eq!(resolve(SwitchState::idle()), None);
    }

    #[test]
    fn test_held_command_is_re_emitted() {
        let mut resolver = CommandResolver::new();

        let first = resolver.poll(reading(true, false, false)).unwrap();
        assert_eq!(first.command, Command::Up);
        assert!(!first.repeated);

        // Held down: one refresh per tick, flagged as a repeat
        for _ in 0..5 {
            let next = resolver.poll(reading(true, false, false)).unwrap();
            assert_eq!(next.command, Command::Up);
            assert!(next.repeated);
        }
    }

    #[test]
    fn test_release_emits_nothing() {
        let mut resolver = CommandResolver::new();
        resolver.poll(reading(true, false, false));

        assert_eq!(resolver.poll(SwitchState::idle()), None);
        assert_eq!(resolver.last_command(), None);

        // Staying idle stays silent
        assert_eq!(resolver.poll(SwitchState::idle()), None);
    }

    #[test]
    fn test_direction_change_is_a_transition() {
        let mut resolver = CommandResolver::new();
        resolver.poll(reading(true, false, false));

        let reversed = resolver.poll(reading(false, true, false)).unwrap();
        assert_eq!(reversed.command, Command::Down);
        assert!(!reversed.repeated);
    }

    #[test]
    fn test_press_after_release_is_a_transition() {
        let mut resolver = CommandResolver::new();
        resolver.poll(reading(true, false, false));
        resolver.poll(SwitchState::idle());

        let again = resolver.poll(reading(true, false, false)).unwrap();
        assert!(!again.repeated);
    }
}
