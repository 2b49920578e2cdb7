//! Trap Classification.
//!
//! This module decides whether a retiring instruction raises an exception. It performs
//! the following:
//! 1. **Detection:** Illegal encodings, misaligned taken targets, `ECALL`, and `EBREAK`.
//! 2. **Prioritization:** Picks a single trap when several conditions hold at once.
//! 3. **Trap State:** The `{trap, trapped_pc}` record handed to the trap unit.

use crate::common::constants::INSTRUCTION_ALIGN_MASK;
use crate::common::error::Trap;
use crate::core::pipeline::latches::ExecutedOp;

/// Trap state captured when an exception is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrapInfo {
    /// The exception (provides cause and value).
    pub trap: Trap,
    /// Program counter of the trapping instruction.
    pub pc: u32,
}

impl TrapInfo {
    /// Returns the `mcause` code.
    pub const fn cause(&self) -> u32 {
        self.trap.cause()
    }

    /// Returns the `mtval` value.
    pub const fn value(&self) -> u32 {
        self.trap.value()
    }
}

/// Trap handler utility functions.
pub struct TrapHandler;

impl TrapHandler {
    /// Classifies an executed instruction.
    ///
    /// Priority, highest first: illegal instruction, misaligned taken target,
    /// environment call, breakpoint. The alignment check is skipped for
    /// branches that are not taken.
    ///
    /// # Arguments
    ///
    /// * `op` - The instruction being accepted by the retire stage.
    ///
    /// # Returns
    ///
    /// The trap to raise, or `None` if the instruction retires normally.
    pub const fn classify(op: &ExecutedOp) -> Option<Trap> {
        if op.illegal {
            Some(Trap::IllegalInstruction(op.inst))
        } else if op.taken() && op.result2 & INSTRUCTION_ALIGN_MASK != 0 {
            Some(Trap::InstructionAddressMisaligned)
        } else if op.ctrl.ecall {
            Some(Trap::EnvironmentCall)
        } else if op.ctrl.ebreak {
            Some(Trap::Breakpoint(op.pc))
        } else {
            None
        }
    }
}
