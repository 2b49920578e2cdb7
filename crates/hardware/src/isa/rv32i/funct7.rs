//! RV32I function codes (funct7).

/// Default encoding (ADD, SRL, and all other R-type operations).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;
