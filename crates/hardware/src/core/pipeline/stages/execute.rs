//! Execute (EX) Stage.
//!
//! This module implements the single-cycle execute stage between decode and retire.
//! It performs the following:
//! 1. **Holding:** Keeps one micro-op in its input register under a valid/ready handshake.
//! 2. **Arithmetic Execution:** Runs the ALU on the finalized operands.
//! 3. **Result Routing:** Builds the primary and secondary results the retire stage expects.
//! 4. **Snooping:** The held micro-op picks up register writes to its sources.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::pipeline::latches::{DecodedOp, ExecutedOp, WriteBack};
use crate::core::units::alu::Alu;
use crate::isa::instruction::InstructionBits;

/// Bit mask to clear the low bit of jump targets.
const JUMP_TARGET_MASK: u32 = !1;

/// Execute stage with a single holding register.
#[derive(Clone, Debug, Default)]
pub struct ExecuteStage {
    held: Option<DecodedOp>,
}

impl ExecuteStage {
    /// Creates an empty execute stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upstream ready for the current cycle.
    pub const fn in_ready(&self, out_ready: bool) -> bool {
        self.held.is_none() || out_ready
    }

    /// Returns `true` if no micro-op is held.
    pub const fn is_empty(&self) -> bool {
        self.held.is_none()
    }

    /// Returns the executed record presented to retire, if valid.
    pub fn output(&self) -> Option<ExecutedOp> {
        self.held.as_ref().map(Self::execute)
    }

    /// Advances the stage by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `input` - Micro-op handed over by decode (only when `in_ready` held).
    /// * `out_ready` - Retire accepted the current output this cycle.
    /// * `wb` - Register write performed at this edge.
    pub fn tick(&mut self, input: Option<DecodedOp>, out_ready: bool, wb: Option<WriteBack>) {
        if out_ready {
            self.held = None;
        }
        if input.is_some() {
            self.held = input;
        }
        if let (Some(op), Some(wb)) = (self.held.as_mut(), wb.as_ref()) {
            op.snoop(wb);
        }
    }

    /// Computes the executed record of a micro-op.
    ///
    /// # Returns
    ///
    /// `result1` is the ALU result, the link address for jumps, or the
    /// source operand for CSR instructions. `result2` is the branch or jump
    /// target, or the store data.
    pub fn execute(op: &DecodedOp) -> ExecutedOp {
        let alu = Alu::execute(op.alu, op.op1, op.op2);
        let ctrl = op.ctrl;

        let (result1, result2) = if ctrl.branch {
            (op.pc.wrapping_add(INSTRUCTION_BYTES), alu & JUMP_TARGET_MASK)
        } else if ctrl.branch_cond {
            (alu, op.pc.wrapping_add(op.imm))
        } else if ctrl.st {
            (alu, op.store_data)
        } else if ctrl.csr {
            (op.op1, 0)
        } else {
            (alu, 0)
        };

        ExecutedOp {
            pc: op.pc,
            inst: op.inst,
            rd: op.rd,
            result1,
            result2,
            ctrl,
            funct3: op.inst.funct3(),
            illegal: op.illegal,
        }
    }
}
