//! Command watchdog
//!
//! Counts scheduling ticks since the last accepted command and demands a
//! forced stop once the count exceeds a threshold sized to the screen's
//! full-range travel time. Sustained motion is only possible while the
//! remote keeps re-sending the active command faster than the threshold.

/// Default expiry threshold in ticks
///
/// 80 ticks at the screen node's 100 ms tick is 8 s, a little over the
/// reference screen's end-to-end travel.
pub const DEFAULT_TIMEOUT_TICKS: u32 = 80;

/// Watchdog configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchdogConfig {
    /// Number of ticks without a command before the motor is force-stopped
    pub timeout_ticks: u32,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            timeout_ticks: DEFAULT_TIMEOUT_TICKS,
        }
    }
}

/// Tick counter with command-refresh reset
///
/// The counter is advanced by the periodic tick and cleared by every
/// accepted command, changed or repeated. On expiry the counter clears
/// itself, so an uncommanded interval produces exactly one forced stop
/// per threshold's worth of silence.
#[derive(Debug, Clone)]
pub struct CommandWatchdog {
    config: WatchdogConfig,
    /// Ticks since the last accepted command
    ticks_since_command: u32,
}

impl Default for CommandWatchdog {
    fn default() -> Self {
        Self::new(WatchdogConfig::default())
    }
}

impl CommandWatchdog {
    /// Create a new watchdog with the given configuration
    pub fn new(config: WatchdogConfig) -> Self {
        Self {
            config,
            ticks_since_command: 0,
        }
    }

    /// Record an accepted command
    pub fn feed(&mut self) {
        self.ticks_since_command = 0;
    }

    /// Advance one tick; returns true when the timeout has expired
    ///
    /// An expiry clears the counter, so the caller sees a single expiry
    /// per uncommanded interval.
    pub fn tick(&mut self) -> bool {
        self.ticks_since_command = self.ticks_since_command.saturating_add(1);

        if self.ticks_since_command > self.config.timeout_ticks {
            self.ticks_since_command = 0;
            true
        } else {
            false
        }
    }

    /// Ticks elapsed since the last accepted command (or expiry)
    pub fn ticks_since_command(&self) -> u32 {
        self.ticks_since_command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watchdog(timeout_ticks: u32) -> CommandWatchdog {
        CommandWatchdog::new(WatchdogConfig { timeout_ticks })
    }

    #[test]
    fn test_no_expiry_within_threshold() {
        let mut dog = watchdog(5);
        for _ in 0..5 {
            assert!(!dog.tick());
        }
    }

    #[test]
    fn test_expiry_after_threshold() {
        let mut dog = watchdog(5);
        for _ in 0..5 {
            assert!(!dog.tick());
        }
        assert!(dog.tick());
        assert_eq!(dog.ticks_since_command(), 0);
    }

    #[test]
    fn test_one_expiry_per_interval() {
        let mut dog = watchdog(5);

        let mut expiries = 0;
        for _ in 0..6 {
            if dog.tick() {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);

        // A second silent interval produces a second expiry
        for _ in 0..6 {
            if dog.tick() {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 2);
    }

    #[test]
    fn test_feed_resets_counter() {
        let mut dog = watchdog(5);
        for _ in 0..4 {
            dog.tick();
        }
        assert_eq!(dog.ticks_since_command(), 4);

        dog.feed();
        assert_eq!(dog.ticks_since_command(), 0);

        // The full threshold applies again after a feed
        for _ in 0..5 {
            assert!(!dog.tick());
        }
        assert!(dog.tick());
    }

    #[test]
    fn test_default_threshold() {
        let dog = CommandWatchdog::default();
        assert_eq!(dog.config.timeout_ticks, DEFAULT_TIMEOUT_TICKS);
    }
}
