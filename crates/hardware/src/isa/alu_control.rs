//! ALU-Control Decoder.
//!
//! Maps the 9-bit key `{funct7[5], funct3, opcode_type}` onto the ALU control
//! bundle. The decoder is a pure lookup table: keys without an entry decode
//! to a plain addition, which is also the correct decode for ADD, ADDI,
//! address generation, LUI, AUIPC, and jumps. Unmatched keys are not errors.

use crate::core::pipeline::signals::{AluControl, ResultSel};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, opcodes};

/// The 9-bit ALU-control lookup key.
///
/// Layout: bit 8 = funct7\[5\], bits 7-5 = funct3, bits 4-0 = opcode type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AluKey(u16);

impl AluKey {
    /// Builds a key from its three fields.
    pub const fn new(funct7_alt: bool, funct3: u32, opcode_type: u32) -> Self {
        let alt = (funct7_alt as u16) << 8;
        let f3 = ((funct3 & 0x7) as u16) << 5;
        Self(alt | f3 | (opcode_type & 0x1F) as u16)
    }

    /// Extracts the key of an instruction word.
    pub fn of(inst: u32) -> Self {
        Self::new(inst.funct7_alt(), inst.funct3(), inst.opcode_type())
    }

    /// Returns the raw 9-bit key.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// funct7\[5\].
    pub const fn alt(self) -> bool {
        (self.0 >> 8) & 1 == 1
    }

    /// funct3.
    pub const fn funct3(self) -> u32 {
        ((self.0 >> 5) & 0x7) as u32
    }

    /// Opcode type.
    pub const fn opcode_type(self) -> u32 {
        (self.0 & 0x1F) as u32
    }
}

const fn ctrl(neg: bool, rev: bool, cin: bool, uns: bool, gte: bool, sel: ResultSel) -> AluControl {
    AluControl {
        neg,
        rev,
        cin,
        uns,
        gte,
        sel,
    }
}

/// Decodes the ALU control bundle for a key.
///
/// # Arguments
///
/// * `key` - The `{funct7[5], funct3, opcode_type}` lookup key.
///
/// # Returns
///
/// The control bundle; the default (add, no modifiers) for unlisted keys.
pub fn decode_alu_control(key: AluKey) -> AluControl {
    use ResultSel::{Adder, And, Compare, Or, Shift, Xor};
    use opcodes::{OP_BRANCH, OP_IMM, OP_REG};

    match (key.opcode_type(), key.funct3(), key.alt()) {
        (OP_REG, funct3::ADD_SUB, true) => ctrl(true, false, true, false, false, Adder),
        (OP_REG | OP_IMM, funct3::SLL, _) => ctrl(false, true, false, false, false, Shift),
        (OP_REG | OP_IMM, funct3::SLT, _) => ctrl(true, false, true, false, false, Compare),
        (OP_REG | OP_IMM, funct3::SLTU, _) => ctrl(true, false, true, true, false, Compare),
        (OP_REG | OP_IMM, funct3::XOR, _) => ctrl(false, false, false, false, false, Xor),
        (OP_REG | OP_IMM, funct3::SRL_SRA, alt) => ctrl(false, false, alt, false, false, Shift),
        (OP_REG | OP_IMM, funct3::OR, _) => ctrl(false, false, false, false, false, Or),
        (OP_REG | OP_IMM, funct3::AND, _) => ctrl(false, false, false, false, false, And),

        (OP_BRANCH, funct3::BEQ, _) => ctrl(false, false, false, false, false, Compare),
        (OP_BRANCH, funct3::BNE, _) => ctrl(false, false, false, false, true, Compare),
        (OP_BRANCH, funct3::BLT, _) => ctrl(true, false, true, false, false, Compare),
        (OP_BRANCH, funct3::BGE, _) => ctrl(true, false, true, false, true, Compare),
        (OP_BRANCH, funct3::BLTU, _) => ctrl(true, false, true, true, false, Compare),
        (OP_BRANCH, funct3::BGEU, _) => ctrl(true, false, true, true, true, Compare),

        _ => AluControl::default(),
    }
}
