//! PIO-based SPI slave receiver
//!
//! The RP2040 SPI block has no usable slave mode for this wiring, so a
//! PIO state machine implements the receive side: wait for a fresh chip
//! select assertion, clock in eight bits MSB-first on rising SCK edges
//! (mode 0), and push the completed byte to the RX FIFO. One select
//! window carries exactly one byte, matching the master's framing; a
//! select that ends early leaves no partial state behind because the
//! program re-arms on the next assertion.

use embassy_rp::gpio::Pull;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, Instance, PioPin, ShiftDirection, StateMachine,
};
use embassy_rp::Peri;

/// SPI slave receiver on one PIO state machine
///
/// MOSI, SCK, and CS must be consecutive GPIOs in that order: the PIO
/// `wait`/`in` instructions address them as offsets from the input base.
pub struct SpiSlaveRx<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> SpiSlaveRx<'d, PIO, SM> {
    /// Create the receiver and start the state machine
    pub fn new<MOSI: PioPin, SCK: PioPin, CS: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        mosi: Peri<'d, MOSI>,
        sck: Peri<'d, SCK>,
        cs: Peri<'d, CS>,
    ) -> Self {
        // pin 0 = MOSI, pin 1 = SCK, pin 2 = CS (relative to input base)
        let prg = pio::pio_asm!(
            ".wrap_target",
            "wait 1 pin 2", // chip select idle
            "wait 0 pin 2", // chip select asserted - transfer begins
            "set x, 7",
            "bitloop:",
            "wait 0 pin 1",
            "wait 1 pin 1", // rising SCK edge
            "in pins, 1",   // sample MOSI
            "jmp x-- bitloop",
            "push block",   // latch the completed byte
            ".wrap",
        );

        let installed = common.load_program(&prg.program);

        let mosi = common.make_pio_pin(mosi);
        let sck = common.make_pio_pin(sck);
        let mut cs = common.make_pio_pin(cs);

        // An unconnected master must read as "deselected"
        cs.set_pull(Pull::Up);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[]);
        cfg.set_in_pins(&[&mosi, &sck, &cs]);
        // MSB first: shift left so the first sampled bit lands at bit 7
        cfg.shift_in.direction = ShiftDirection::Left;

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::In, &[&mosi, &sck, &cs]);
        sm.set_enable(true);

        Self { sm }
    }

    /// Wait for the next byte latched off the link
    pub async fn read_byte(&mut self) -> u8 {
        (self.sm.rx().wait_pull().await & 0xFF) as u8
    }
}
