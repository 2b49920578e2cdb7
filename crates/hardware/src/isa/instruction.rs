//! Instruction field extraction.
//!
//! Provides bit extraction functions for decoding RV32I instruction fields
//! from 32-bit instruction encodings, including the 5-bit `opcode_type`
//! dispatch key used throughout the decoder.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for the two low opcode bits; `0b11` for every 32-bit instruction.
pub const OPCODE_QUADRANT_MASK: u32 = 0x3;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the CSR address field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;

/// Bit 5 of funct7 selecting the alternate encoding (SUB, SRA, SRAI).
pub const FUNCT7_ALT_BIT: u32 = 0x20;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the full 7-bit opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the 2-bit high opcode field (bits 6-5).
    fn opcode_high(&self) -> u32;

    /// Extracts the 3-bit low opcode field (bits 4-2).
    fn opcode_low(&self) -> u32;

    /// Extracts the 5-bit dispatch key `{opcode_high, opcode_low}`.
    ///
    /// The two least significant opcode bits are excluded; they are `0b11`
    /// for every legal 32-bit instruction and checked separately.
    fn opcode_type(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Returns `true` when funct7 bit 5 (instruction bit 30) is set.
    fn funct7_alt(&self) -> bool;

    /// Extracts the CSR address field (bits 20-31).
    fn csr(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn opcode_high(&self) -> u32 {
        (self >> 5) & 0x3
    }

    #[inline(always)]
    fn opcode_low(&self) -> u32 {
        (self >> 2) & 0x7
    }

    #[inline(always)]
    fn opcode_type(&self) -> u32 {
        (self.opcode_high() << 3) | self.opcode_low()
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct7_alt(&self) -> bool {
        (self.funct7() & FUNCT7_ALT_BIT) != 0
    }

    #[inline(always)]
    fn csr(&self) -> u32 {
        (self >> 20) & CSR_MASK
    }
}
