//! RISC-V General-Purpose Register File.
//!
//! This module implements the 32 x 32-bit integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Reads of `x0` always return zero.
//! 3. **Read Ports:** Two synchronous read ports with one cycle of latency.
//! 4. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::NUM_REGS;

/// Mask applied to register indices before indexing the storage array.
const INDEX_MASK: usize = NUM_REGS - 1;

/// General-Purpose Register file.
///
/// The write port accepts index 0 and stores the value, but every read path
/// special-cases index 0 so the stored value is never observable.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
    port1: u32,
    port2: u32,
}

impl Gpr {
    /// Creates a new register file with all registers and read ports at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register combinationally.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The stored value, or 0 for `x0`.
    pub fn read(&self, idx: usize) -> u32 {
        let idx = idx & INDEX_MASK;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register through the single write port.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx & INDEX_MASK] = val;
    }

    /// Samples both read ports at a clock edge.
    ///
    /// The values become visible through [`Gpr::read_ports`] until the next
    /// call, modelling a one-cycle synchronous read.
    pub fn issue_read(&mut self, rs1: usize, rs2: usize) {
        self.port1 = self.read(rs1);
        self.port2 = self.read(rs2);
    }

    /// Returns the data latched by the last [`Gpr::issue_read`].
    pub const fn read_ports(&self) -> (u32, u32) {
        (self.port1, self.port2)
    }

    /// Returns a copy of the architectural register state (`x0` reads as zero).
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut regs = self.regs;
        regs[0] = 0;
        regs
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers four per row with hexadecimal formatting.
    pub fn dump(&self) {
        let regs = self.snapshot();
        for i in (0..NUM_REGS).step_by(4) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                regs[i],
                i + 1,
                regs[i + 1],
                i + 2,
                regs[i + 2],
                i + 3,
                regs[i + 3]
            );
        }
    }
}
