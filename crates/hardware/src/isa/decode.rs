//! RV32I Instruction Classifier.
//!
//! Turns a raw 32-bit word into everything the Decode Sequencer latches in
//! its first cycle. It performs the following:
//! 1. **Field Extraction:** Register indices, function codes, and the immediate.
//! 2. **Operand Routing:** Whether each ALU operand comes from zero, the PC,
//!    a register, or the immediate.
//! 3. **Retire Classification:** The flags the retire stage dispatches on.
//! 4. **Legality:** Flags encodings outside the base integer ISA.

use crate::core::pipeline::signals::{AluControl, Op1Src, Op2Src, RetireControl};
use crate::isa::alu_control::{AluKey, decode_alu_control};
use crate::isa::immediate::decode_immediate;
use crate::isa::instruction::{InstructionBits, OPCODE_QUADRANT_MASK};
use crate::isa::privileged::opcodes as sys;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Result of classifying one instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u32,
    /// 5-bit dispatch key.
    pub opcode_type: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// funct3 field.
    pub funct3: u32,
    /// funct7 field.
    pub funct7: u32,
    /// Sign-extended immediate for the instruction's format.
    pub imm: u32,
    /// ALU control bundle.
    pub alu: AluControl,
    /// Operand 1 source.
    pub op1: Op1Src,
    /// Operand 2 source.
    pub op2: Op2Src,
    /// Retire-stage flags.
    pub retire: RetireControl,
    /// Encoding is not a legal RV32I instruction.
    pub illegal: bool,
}

/// Classifies a 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The fully classified instruction. Illegal encodings still produce a
/// well-formed record (with `illegal` set and no retire effects) so the
/// pipeline can carry them to the retire stage as a trap.
pub fn decode(inst: u32) -> Decoded {
    let opcode_type = inst.opcode_type();
    let illegal = is_illegal(inst);

    let (op1, op2) = operand_sources(opcode_type, inst.funct3());
    let retire = if illegal {
        RetireControl::default()
    } else {
        retire_control(inst)
    };

    Decoded {
        raw: inst,
        opcode_type,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: decode_immediate(inst),
        alu: decode_alu_control(AluKey::of(inst)),
        op1,
        op2,
        retire,
        illegal,
    }
}

/// Operand routing per opcode type.
///
/// CSR register forms read `rs1` into operand 1 so the execute unit can pass
/// it through unchanged. CSR immediate forms read nothing; the CSR unit takes
/// `zimm` straight from the `rs1` field of the instruction word.
fn operand_sources(opcode_type: u32, f3: u32) -> (Op1Src, Op2Src) {
    match opcode_type {
        opcodes::OP_LUI => (Op1Src::Zero, Op2Src::Imm),
        opcodes::OP_AUIPC | opcodes::OP_JAL => (Op1Src::Pc, Op2Src::Imm),
        opcodes::OP_JALR | opcodes::OP_LOAD | opcodes::OP_STORE | opcodes::OP_IMM => {
            (Op1Src::Reg, Op2Src::Imm)
        }
        opcodes::OP_BRANCH | opcodes::OP_REG => (Op1Src::Reg, Op2Src::Reg),
        opcodes::OP_SYSTEM if f3 & sys::CSR_IMM_BIT == 0 && f3 != sys::PRIV => {
            (Op1Src::Reg, Op2Src::Imm)
        }
        _ => (Op1Src::Pc, Op2Src::Imm),
    }
}

fn retire_control(inst: u32) -> RetireControl {
    let f3 = inst.funct3();
    let mut ctrl = RetireControl::default();
    match inst.opcode_type() {
        opcodes::OP_LUI | opcodes::OP_AUIPC | opcodes::OP_REG | opcodes::OP_IMM => {
            ctrl.rd_write = true;
        }
        opcodes::OP_JAL | opcodes::OP_JALR => {
            ctrl.rd_write = true;
            ctrl.branch = true;
        }
        opcodes::OP_BRANCH => ctrl.branch_cond = true,
        opcodes::OP_LOAD => ctrl.ld = true,
        opcodes::OP_STORE => ctrl.st = true,
        opcodes::OP_SYSTEM if f3 == sys::PRIV => match inst {
            sys::ECALL => ctrl.ecall = true,
            sys::EBREAK => ctrl.ebreak = true,
            sys::MRET => ctrl.ret = true,
            sys::WFI => ctrl.wfi = true,
            _ => {}
        },
        opcodes::OP_SYSTEM => ctrl.csr = f3 != sys::RESERVED,
        _ => {}
    }
    ctrl
}

/// Returns `true` if `inst` is not a legal RV32I encoding.
///
/// FENCE and FENCE.I are legal and retire as no-ops.
pub fn is_illegal(inst: u32) -> bool {
    if inst & OPCODE_QUADRANT_MASK != OPCODE_QUADRANT_MASK {
        return true;
    }

    let f3 = inst.funct3();
    let f7 = inst.funct7();
    match inst.opcode_type() {
        opcodes::OP_LUI | opcodes::OP_AUIPC | opcodes::OP_JAL => false,
        opcodes::OP_JALR => f3 != funct3::JALR,
        opcodes::OP_BRANCH => matches!(f3, 0b010 | 0b011),
        opcodes::OP_LOAD => !matches!(
            f3,
            funct3::LB | funct3::LH | funct3::LW | funct3::LBU | funct3::LHU
        ),
        opcodes::OP_STORE => !matches!(f3, funct3::SB | funct3::SH | funct3::SW),
        opcodes::OP_IMM => match f3 {
            funct3::SLL => f7 != funct7::DEFAULT,
            funct3::SRL_SRA => f7 != funct7::DEFAULT && f7 != funct7::ALT,
            _ => false,
        },
        opcodes::OP_REG => match f7 {
            funct7::DEFAULT => false,
            funct7::ALT => !matches!(f3, funct3::ADD_SUB | funct3::SRL_SRA),
            _ => true,
        },
        opcodes::OP_MISC_MEM => !matches!(f3, funct3::FENCE | funct3::FENCE_I),
        opcodes::OP_SYSTEM => match f3 {
            sys::PRIV => !matches!(inst, sys::ECALL | sys::EBREAK | sys::MRET | sys::WFI),
            sys::RESERVED => true,
            _ => false,
        },
        _ => true,
    }
}
