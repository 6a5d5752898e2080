//! Two-sample switch debouncing
//!
//! A reading is accepted only after two consecutive ticks return the same
//! raw sample. A bouncing contact therefore delays a state change by one
//! tick; it never produces a spurious command.

/// Raw or debounced reading of the three switch lines
///
/// All lines are logical: `true` means the switch is asserted, regardless
/// of the electrical polarity the board wires it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchState {
    /// Raise switch asserted
    pub up: bool,
    /// Lower switch asserted
    pub down: bool,
    /// Stop switch asserted
    pub stop: bool,
}

impl SwitchState {
    /// Reading with no switch asserted
    pub const fn idle() -> Self {
        Self {
            up: false,
            down: false,
            stop: false,
        }
    }

    /// Check if no switch is asserted
    pub fn is_idle(&self) -> bool {
        !self.up && !self.down && !self.stop
    }
}

/// Debouncer state for the three switch lines
///
/// Holds the previous tick's raw sample for the stability comparison and
/// the last reading that passed it.
#[derive(Debug, Clone, Default)]
pub struct SwitchDebouncer {
    /// Raw sample from the previous tick
    last_raw: Option<SwitchState>,
    /// Last reading that was stable for two ticks
    stable: SwitchState,
}

impl SwitchDebouncer {
    /// Create a new debouncer
    ///
    /// Until the first two identical samples arrive, nothing is forwarded
    /// and the stable reading is idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample; returns the reading if it is stable this tick
    ///
    /// A reading is stable when it matches the previous tick's raw sample.
    /// On a mismatch the previous stable reading is retained and `None` is
    /// returned, suppressing resolution for this tick.
    pub fn sample(&mut self, raw: SwitchState) -> Option<SwitchState> {
        let stable = self.last_raw == Some(raw);
        self.last_raw = Some(raw);

        if stable {
            self.stable = raw;
            Some(raw)
        } else {
            None
        }
    }

    /// The last reading that passed the stability check
    pub fn stable(&self) -> SwitchState {
        self.stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: SwitchState = SwitchState {
        up: true,
        down: false,
        stop: false,
    };

    #[test]
    fn test_first_sample_is_suppressed() {
        let mut debouncer = SwitchDebouncer::new();
        assert_eq!(debouncer.sample(UP), None);
    }

    #[test]
    fn test_two_identical_samples_forward() {
        let mut debouncer = SwitchDebouncer::new();
        assert_eq!(debouncer.sample(UP), None);
        assert_eq!(debouncer.sample(UP), Some(UP));
        assert_eq!(debouncer.stable(), UP);
    }

    #[test]
    fn test_bounce_is_suppressed() {
        let mut debouncer = SwitchDebouncer::new();
        debouncer.sample(SwitchState::idle());
        debouncer.sample(SwitchState::idle());

        // A one-tick glitch never reaches the resolver
        assert_eq!(debouncer.sample(UP), None);
        assert_eq!(debouncer.sample(SwitchState::idle()), None);
        assert_eq!(debouncer.stable(), SwitchState::idle());

        // The next identical pair does
        assert_eq!(debouncer.sample(SwitchState::idle()), Some(SwitchState::idle()));
    }

    #[test]
    fn test_alternating_samples_never_forward() {
        let mut debouncer = SwitchDebouncer::new();
        for _ in 0..10 {
            assert_eq!(debouncer.sample(UP), None);
            assert_eq!(debouncer.sample(SwitchState::idle()), None);
        }
    }

    #[test]
    fn test_held_switch_forwards_every_tick() {
        let mut debouncer = SwitchDebouncer::new();
        debouncer.sample(UP);
        for _ in 0..5 {
            assert_eq!(debouncer.sample(UP), Some(UP));
        }
    }
}
