//! Retire Sequencer.
//!
//! This module implements the final stage of the pipeline. It performs the following:
//! 1. **Classification:** Each accepted instruction is routed, in priority order, to
//!    trap entry, the load-store unit, the CSR unit, trap return, WFI, or direct completion.
//! 2. **Completion Tracking:** Waits in LSU/CSR for the unit's done pulse.
//! 3. **Trap Sequencing:** EXCEPT activates the trap, RETURN requests the return,
//!    JUMP waits for the resolved target.
//! 4. **Write-Back:** Feeds the CSR, load, and direct writes through the arbiter.
//! 5. **Retired Pulse:** Fires one cycle after an instruction completes.

use tracing::{debug, trace};

use crate::common::error::Trap;
use crate::core::arch::trap::{TrapHandler, TrapInfo};
use crate::core::pipeline::latches::{ExecutedOp, WriteBack};
use crate::core::pipeline::stages::writeback::{WriteSource, arbitrate};
use crate::core::units::csr::{CsrRequest, CsrResponse};
use crate::core::units::lsu::{LsuRequest, LsuResponse};

/// Retire sequencer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetireState {
    /// Accepting one instruction per cycle.
    #[default]
    Steady,
    /// Waiting for the load-store unit.
    Lsu,
    /// Waiting for the CSR unit.
    Csr,
    /// Activating a trap.
    Except,
    /// Returning from a trap.
    Return,
    /// Waiting for an interrupt.
    Wfi,
    /// Waiting for the trap unit's jump target.
    Jump,
}

/// Inputs sampled by the retire stage in one cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct RetireInputs {
    /// Executed record offered by execute.
    pub op: Option<ExecutedOp>,
    /// Load-store unit outputs.
    pub lsu: LsuResponse,
    /// CSR unit outputs.
    pub csr: CsrResponse,
    /// An enabled interrupt is pending.
    pub wake: bool,
}

/// Outputs of the retire stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetireOutputs {
    /// The offered record was accepted.
    pub accepted: bool,
    /// Register write selected by the arbiter.
    pub write_back: Option<WriteSource>,
    /// Next fetch address after a taken jump, branch, or trap jump.
    pub redirect: Option<u32>,
    /// Start pulse for the load-store unit.
    pub lsu_start: Option<LsuRequest>,
    /// Start pulse for the CSR unit.
    pub csr_start: Option<CsrRequest>,
    /// Trap activation pulse.
    pub activate_trap: Option<TrapInfo>,
    /// Trap return pulse.
    pub return_trap: bool,
    /// Instruction-retired pulse.
    pub retired: bool,
}

/// Retire stage: sequencer state, trap latches, and the retired-pulse register.
#[derive(Clone, Debug, Default)]
pub struct RetireStage {
    state: RetireState,
    cause: Option<Trap>,
    trapped_pc: u32,
    retired_next: bool,
}

impl RetireStage {
    /// Creates a retire stage in STEADY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current sequencer state.
    pub const fn state(&self) -> RetireState {
        self.state
    }

    /// Upstream ready: the stage accepts only in STEADY.
    pub const fn in_ready(&self) -> bool {
        matches!(self.state, RetireState::Steady)
    }

    /// Returns the program counter of the last accepted instruction.
    pub const fn trapped_pc(&self) -> u32 {
        self.trapped_pc
    }

    /// Advances the stage by one clock edge.
    ///
    /// # Arguments
    ///
    /// * `inputs` - The executed record and unit responses for this cycle.
    ///
    /// # Returns
    ///
    /// The register write, redirect, and unit pulses for this cycle.
    pub fn tick(&mut self, inputs: RetireInputs) -> RetireOutputs {
        let mut out = RetireOutputs {
            retired: std::mem::take(&mut self.retired_next),
            ..RetireOutputs::default()
        };
        let mut direct = None;
        let mut complete = false;

        match self.state {
            RetireState::Steady => {
                if let Some(op) = inputs.op {
                    out.accepted = true;
                    complete = self.accept(&op, &mut out, &mut direct);
                }
            }
            RetireState::Lsu => {
                if inputs.lsu.done {
                    trace!("lsu done");
                    self.state = RetireState::Steady;
                    complete = true;
                }
            }
            RetireState::Csr => {
                if inputs.csr.done {
                    trace!("csr done");
                    self.state = RetireState::Steady;
                    complete = true;
                }
            }
            RetireState::Except => {
                out.activate_trap = self.cause.map(|trap| TrapInfo {
                    trap,
                    pc: self.trapped_pc,
                });
                self.state = RetireState::Jump;
            }
            RetireState::Return => {
                out.return_trap = true;
                self.state = RetireState::Jump;
                complete = true;
            }
            RetireState::Wfi => {
                if inputs.wake {
                    debug!("wfi wake");
                    self.state = RetireState::Steady;
                    complete = true;
                }
            }
            RetireState::Jump => {
                if let Some(target) = inputs.csr.trap_jump {
                    out.redirect = Some(target);
                    self.state = RetireState::Steady;
                }
            }
        }

        out.write_back = arbitrate(inputs.csr.write, inputs.lsu.write, direct);
        self.retired_next = complete;
        out
    }

    /// Classifies an instruction accepted in STEADY.
    ///
    /// Returns `true` if it completes this cycle.
    fn accept(
        &mut self,
        op: &ExecutedOp,
        out: &mut RetireOutputs,
        direct: &mut Option<WriteBack>,
    ) -> bool {
        self.trapped_pc = op.pc;
        let ctrl = op.ctrl;
        trace!(
            pc = format_args!("{:#010x}", op.pc),
            inst = format_args!("{:#010x}", op.inst),
            "retire accept"
        );

        if let Some(trap) = TrapHandler::classify(op) {
            debug!(pc = format_args!("{:#010x}", op.pc), %trap, "exception");
            self.cause = Some(trap);
            self.state = RetireState::Except;
            return false;
        }

        if ctrl.ld || ctrl.st {
            out.lsu_start = Some(LsuRequest {
                addr: op.result1,
                data: op.result2,
                funct3: op.funct3,
                rd: op.rd,
                store: ctrl.st,
            });
            self.state = RetireState::Lsu;
            false
        } else if ctrl.csr {
            out.csr_start = Some(CsrRequest {
                inst: op.inst,
                wdata: op.result1,
            });
            self.state = RetireState::Csr;
            false
        } else if ctrl.ret {
            self.state = RetireState::Return;
            false
        } else if ctrl.wfi {
            self.state = RetireState::Wfi;
            false
        } else {
            if ctrl.rd_write {
                *direct = Some(WriteBack {
                    rd: op.rd,
                    data: op.result1,
                });
            }
            if op.taken() {
                out.redirect = Some(op.result2);
            }
            true
        }
    }
}
