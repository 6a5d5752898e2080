//! Motion commands sent from the remote to the screen controller

/// Motion commands carried over the link
///
/// The resolver on the remote may also produce "no command" for an idle
/// switch reading; that has no wire representation and is simply not
/// transmitted (`Option<Command>` on the remote side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Raise the screen
    Up,
    /// Lower the screen
    Down,
    /// Stop the motor
    Stop,
}

// Wire format values
pub const CMD_UP: u8 = b'U';
pub const CMD_DOWN: u8 = b'D';
pub const CMD_STOP: u8 = b'S';

impl Command {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_UP => Some(Command::Up),
            CMD_DOWN => Some(Command::Down),
            CMD_STOP => Some(Command::Stop),
            _ => None,
        }
    }

    /// Parse a received byte, treating anything undecodable as stop
    ///
    /// This is the decoder the receive path uses: an unknown byte on the
    /// wire must never leave the motor running.
    pub fn decode_or_stop(byte: u8) -> Self {
        Self::from_byte(byte).unwrap_or(Command::Stop)
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Up => CMD_UP,
            Command::Down => CMD_DOWN,
            Command::Stop => CMD_STOP,
        }
    }

    /// Returns true if this command starts or sustains motion
    pub fn is_motion(&self) -> bool {
        matches!(self, Command::Up | Command::Down)
    }

    /// The command that reverses this one, if any
    pub fn opposite(&self) -> Option<Self> {
        match self {
            Command::Up => Some(Command::Down),
            Command::Down => Some(Command::Up),
            Command::Stop => None,
        }
    }
}
