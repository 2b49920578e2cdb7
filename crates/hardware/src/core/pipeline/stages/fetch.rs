//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the pipeline. It performs the following:
//! 1. **Sequential Fetch:** Presents `{pc, inst}` and advances by four bytes on accept.
//! 2. **Serialization:** Instructions that can redirect or trap (branches, jumps,
//!    system instructions, illegal encodings) issue only into an empty pipeline,
//!    and fetch then waits for the pipeline to drain.
//! 3. **Redirect:** Takes the retire-stage redirect target when one occurs.
//!
//! Because nothing younger than a redirecting instruction is ever in flight,
//! the pipeline needs no flush logic.

use tracing::debug;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::pipeline::latches::FetchPacket;
use crate::isa::decode::is_illegal;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;
use crate::soc::traits::InstructionPort;

/// Returns `true` if `inst` must issue into an empty pipeline.
pub fn is_serializing(inst: u32) -> bool {
    matches!(
        inst.opcode_type(),
        opcodes::OP_BRANCH | opcodes::OP_JAL | opcodes::OP_JALR | opcodes::OP_SYSTEM
    ) || is_illegal(inst)
}

/// Fetch stage state.
#[derive(Clone, Debug)]
pub struct FetchStage {
    pc: u32,
    waiting: bool,
}

impl FetchStage {
    /// Creates a fetch stage starting at `start_pc`.
    pub const fn new(start_pc: u32) -> Self {
        Self {
            pc: start_pc,
            waiting: false,
        }
    }

    /// Returns the next fetch address.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Returns `true` while fetch waits for a serializing instruction to drain.
    pub const fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Instruction offered to decode this cycle.
    ///
    /// # Arguments
    ///
    /// * `mem` - Instruction memory.
    /// * `pipeline_empty` - No instruction is in decode, execute, or retire.
    pub fn output(&self, mem: &dyn InstructionPort, pipeline_empty: bool) -> Option<FetchPacket> {
        if self.waiting {
            return None;
        }
        let inst = mem.fetch(self.pc);
        if is_serializing(inst) && !pipeline_empty {
            return None;
        }
        Some(FetchPacket { pc: self.pc, inst })
    }

    /// Advances the stage by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `accepted` - Packet decode accepted this cycle.
    /// * `drained` - The pipeline is empty after this edge.
    /// * `redirect` - Redirect target produced by retire at this edge.
    pub fn tick(&mut self, accepted: Option<FetchPacket>, drained: bool, redirect: Option<u32>) {
        if let Some(target) = redirect {
            debug!(
                from = format_args!("{:#010x}", self.pc),
                to = format_args!("{target:#010x}"),
                "fetch redirect"
            );
            self.pc = target;
            self.waiting = false;
            return;
        }
        if let Some(pkt) = accepted {
            self.pc = pkt.pc.wrapping_add(INSTRUCTION_BYTES);
            self.waiting = is_serializing(pkt.inst);
            return;
        }
        if self.waiting && drained {
            self.waiting = false;
        }
    }
}
