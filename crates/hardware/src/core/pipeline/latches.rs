//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the four stages:
//! Fetch → Decode → Execute → Retire, plus the register write port.
//!
//! 1. **Instruction Flow:** Structures for carrying state between pipeline stages.
//! 2. **Operand Snooping:** Waiting micro-ops pick up register writes that
//!    happen while they sit in a latch.

use crate::core::pipeline::signals::{AluControl, RetireControl};
use crate::isa::instruction::InstructionBits;

/// Entry presented by fetch to decode.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct FetchPacket {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Decoded micro-operation (Decode to Execute).
///
/// Represents `rd = ALU_OP(op1, op2)` plus everything the later stages need.
/// `op1` holds either the program counter (or zero) or a register value;
/// `op2` holds either the immediate or a register value. Which one is final
/// only after the decode stage's second cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DecodedOp {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate.
    pub imm: u32,
    /// First ALU operand.
    pub op1: u32,
    /// Second ALU operand.
    pub op2: u32,
    /// Value of the second read port (store data).
    pub store_data: u32,
    /// ALU control bundle.
    pub alu: AluControl,
    /// `op1` is register-sourced.
    pub rs1_read: bool,
    /// `op2` is register-sourced.
    pub rs2_read: bool,
    /// First source index (zero when `op1` is not register-sourced).
    pub rs1: usize,
    /// Second source index (zero when `op2` is not register-sourced).
    pub rs2: usize,
    /// Decoder flagged the encoding as illegal.
    pub illegal: bool,
    /// Retire-stage flags.
    pub ctrl: RetireControl,
}

impl DecodedOp {
    /// Applies a register write that happened while this micro-op waited.
    ///
    /// Writes to `x0` are ignored since reads of `x0` are always zero.
    pub fn snoop(&mut self, wb: &WriteBack) {
        if wb.rd == 0 {
            return;
        }
        if self.rs1_read && self.rs1 == wb.rd {
            self.op1 = wb.data;
        }
        if self.rs2_read && self.rs2 == wb.rd {
            self.op2 = wb.data;
        }
        if self.inst.rs2() == wb.rd {
            self.store_data = wb.data;
        }
    }
}

/// Executed instruction record (Execute to Retire).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExecutedOp {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// Primary result: ALU output, link address, comparator bit, or memory address.
    pub result1: u32,
    /// Secondary result: branch target or store data.
    pub result2: u32,
    /// Retire-stage flags.
    pub ctrl: RetireControl,
    /// Size/sign selector for memory ops, operation for CSR ops.
    pub funct3: u32,
    /// Decoder flagged the encoding as illegal.
    pub illegal: bool,
}

impl ExecutedOp {
    /// Returns `true` if the instruction redirects control flow.
    pub const fn taken(&self) -> bool {
        self.ctrl.branch || (self.ctrl.branch_cond && self.result1 & 1 == 1)
    }
}

/// One register write-port transaction.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct WriteBack {
    /// Destination register index.
    pub rd: usize,
    /// Value written.
    pub data: u32,
}
