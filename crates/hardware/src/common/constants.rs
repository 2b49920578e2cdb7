//! Global constants.
//!
//! Widths and reset values shared by the fetch, decode, and retire logic.

/// Size of one instruction in bytes (no compressed instructions).
pub const INSTRUCTION_BYTES: u32 = 4;

/// Mask of the address bits that must be zero for an instruction address.
pub const INSTRUCTION_ALIGN_MASK: u32 = INSTRUCTION_BYTES - 1;

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;

/// Canonical NOP encoding (`ADDI x0, x0, 0`).
pub const INSTRUCTION_NOP: u32 = 0x0000_0013;
