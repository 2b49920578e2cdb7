//! Decode Sequencer.
//!
//! This module implements the two-cycle decode stage. It performs the following:
//! 1. **ID1:** Accepts an instruction from fetch, latches the immediate, ALU
//!    control, and operand routing, and issues the register-file read.
//! 2. **ID2:** Merges the read-port data into the register-sourced operands
//!    and presents the micro-op downstream.
//! 3. **Handshake:** `in_ready` holds only in ID1 while the output register
//!    is empty or being drained, so no micro-op is ever overwritten.
//! 4. **Snooping:** A micro-op waiting in the output register picks up
//!    register writes to its sources.

use tracing::trace;

use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::latches::{DecodedOp, FetchPacket, WriteBack};
use crate::core::pipeline::signals::{Op1Src, Op2Src};
use crate::isa::decode::decode;
use crate::isa::instruction::InstructionBits;

/// Decode sequencer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeState {
    /// Waiting for an instruction; the register read is issued on accept.
    #[default]
    Id1,
    /// Register data available; operands are finalized this cycle.
    Id2,
}

/// Decode stage: sequencer state, the micro-op under construction, and the output register.
#[derive(Clone, Debug, Default)]
pub struct DecodeStage {
    state: DecodeState,
    pending: DecodedOp,
    out: Option<DecodedOp>,
}

impl DecodeStage {
    /// Creates an empty decode stage in ID1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current sequencer state.
    pub const fn state(&self) -> DecodeState {
        self.state
    }

    /// Upstream ready for the current cycle.
    ///
    /// # Arguments
    ///
    /// * `out_ready` - Downstream ready for the current cycle.
    pub const fn in_ready(&self, out_ready: bool) -> bool {
        matches!(self.state, DecodeState::Id1) && (self.out.is_none() || out_ready)
    }

    /// Returns the micro-op presented downstream, if valid.
    pub const fn output(&self) -> Option<&DecodedOp> {
        self.out.as_ref()
    }

    /// Returns `true` if no instruction is inside the stage.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, DecodeState::Id1) && self.out.is_none()
    }

    /// Advances the stage by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `input` - Instruction offered by fetch this cycle.
    /// * `out_ready` - Downstream accepts the current output this cycle.
    /// * `regs` - Register file (read ports sampled on accept).
    /// * `wb` - Register write performed at this edge.
    ///
    /// # Returns
    ///
    /// `true` if `input` was accepted.
    pub fn tick(
        &mut self,
        input: Option<FetchPacket>,
        out_ready: bool,
        regs: &mut Gpr,
        wb: Option<WriteBack>,
    ) -> bool {
        let in_ready = self.in_ready(out_ready);

        if out_ready {
            self.out = None;
        }
        if let (Some(out), Some(wb)) = (self.out.as_mut(), wb.as_ref()) {
            out.snoop(wb);
        }

        match self.state {
            DecodeState::Id1 => match input {
                Some(pkt) if in_ready => {
                    self.pending = Self::latch(pkt);
                    regs.issue_read(pkt.inst.rs1(), pkt.inst.rs2());
                    self.state = DecodeState::Id2;
                    trace!(
                        pc = format_args!("{:#010x}", pkt.pc),
                        inst = format_args!("{:#010x}", pkt.inst),
                        "decode accept"
                    );
                    true
                }
                _ => false,
            },
            DecodeState::Id2 => {
                let (port1, port2) = regs.read_ports();
                let mut op = self.pending;
                if op.rs1_read {
                    op.op1 = port1;
                }
                if op.rs2_read {
                    op.op2 = port2;
                }
                op.store_data = port2;
                if let Some(wb) = wb.as_ref() {
                    op.snoop(wb);
                }
                self.out = Some(op);
                self.state = DecodeState::Id1;
                false
            }
        }
    }

    /// Builds the ID1 latch contents for an accepted instruction.
    fn latch(pkt: FetchPacket) -> DecodedOp {
        let d = decode(pkt.inst);

        let rs1_read = d.op1 == Op1Src::Reg && d.rs1 != 0;
        let rs2_read = d.op2 == Op2Src::Reg && d.rs2 != 0;
        let op1 = match d.op1 {
            Op1Src::Pc => pkt.pc,
            Op1Src::Zero | Op1Src::Reg => 0,
        };
        let op2 = match d.op2 {
            Op2Src::Imm => d.imm,
            Op2Src::Reg => 0,
        };

        DecodedOp {
            pc: pkt.pc,
            inst: pkt.inst,
            rd: d.rd,
            imm: d.imm,
            op1,
            op2,
            store_data: 0,
            alu: d.alu,
            rs1_read,
            rs2_read,
            rs1: if rs1_read { d.rs1 } else { 0 },
            rs2: if rs2_read { d.rs2 } else { 0 },
            illegal: d.illegal,
            ctrl: d.retire,
        }
    }
}
