//! CSR and trap unit.
//!
//! This module implements the machine-mode CSR unit the retire stage drives. It provides:
//! 1. **CSR Access:** CSRRW/CSRRS/CSRRC and their immediate forms, completing after a fixed
//!    latency.
//! 2. **Trap Entry:** Captures `mepc`, `mcause`, `mtval`, stacks `MIE`, and jumps to `mtvec`.
//! 3. **Trap Return:** Restores `MIE` and jumps to `mepc`.
//! 4. **Counters:** `mcycle` every cycle and `minstret` per retired-instruction pulse.
//! 5. **Wake-Up:** Reports a pending enabled interrupt for WFI.

use tracing::{debug, trace};

use crate::core::arch::csr::{Csrs, MEPC_MASK, MIP_IMPLEMENTED, MSTATUS_MIE, MSTATUS_MPIE};
use crate::core::arch::trap::TrapInfo;
use crate::core::pipeline::latches::WriteBack;
use crate::isa::instruction::InstructionBits;
use crate::isa::privileged::opcodes as sys;

/// CSR operation write (CSRRW/CSRRWI).
const OP_WRITE: u32 = sys::CSRRW & sys::CSR_OP_MASK;
/// CSR operation set (CSRRS/CSRRSI).
const OP_SET: u32 = sys::CSRRS & sys::CSR_OP_MASK;
/// CSR operation clear (CSRRC/CSRRCI).
const OP_CLEAR: u32 = sys::CSRRC & sys::CSR_OP_MASK;

/// Start request from the retire stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CsrRequest {
    /// Raw instruction (CSR address, operation, `rd`, `rs1`/`zimm`).
    pub inst: u32,
    /// Register source operand (`rs1` value).
    pub wdata: u32,
}

/// Per-cycle output of the CSR unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CsrResponse {
    /// The CSR access completed this cycle.
    pub done: bool,
    /// Register write of the old CSR value.
    pub write: Option<WriteBack>,
    /// Resolved trap-entry or trap-return target.
    pub trap_jump: Option<u32>,
}

/// CSR unit contract seen by the retire stage.
pub trait CsrUnit {
    /// Starts a CSR access.
    fn start(&mut self, req: CsrRequest);

    /// Activates a trap with the latched cause, value, and trapped PC.
    fn activate_trap(&mut self, info: TrapInfo);

    /// Returns from the current trap.
    fn return_trap(&mut self);

    /// Counts one retired instruction.
    fn instret_pulse(&mut self);

    /// Sets the externally driven interrupt-pending lines.
    fn set_pending(&mut self, bits: u32);

    /// Returns `true` if an enabled interrupt is pending.
    fn wake(&self) -> bool;

    /// Reads a CSR without side effects.
    fn peek(&self, addr: u32) -> u32;

    /// Advances one cycle.
    fn cycle(&mut self) -> CsrResponse;
}

/// Reference machine-mode CSR unit.
#[derive(Clone, Debug)]
pub struct CsrFile {
    csrs: Csrs,
    latency: u64,
    pending: Option<(CsrRequest, u64)>,
    jump: Option<u32>,
}

impl CsrFile {
    /// Creates a CSR unit in its reset state.
    ///
    /// # Arguments
    ///
    /// * `mtvec` - Reset trap vector.
    /// * `hart_id` - Value of `mhartid`.
    /// * `latency` - Cycles from start to done (values below 1 are raised to 1).
    pub fn new(mtvec: u32, hart_id: u32, latency: u64) -> Self {
        Self {
            csrs: Csrs::new(mtvec, hart_id),
            latency: latency.max(1),
            pending: None,
            jump: None,
        }
    }

    /// Returns the architectural CSR state.
    pub const fn csrs(&self) -> &Csrs {
        &self.csrs
    }

    fn execute(&mut self, req: CsrRequest) -> Option<WriteBack> {
        let inst = req.inst;
        let addr = inst.csr();
        let f3 = inst.funct3();
        let src = if f3 & sys::CSR_IMM_BIT != 0 {
            inst.rs1() as u32
        } else {
            req.wdata
        };
        let old = self.csrs.read(addr);

        let new = match f3 & sys::CSR_OP_MASK {
            OP_WRITE => Some(src),
            OP_SET if inst.rs1() != 0 => Some(old | src),
            OP_CLEAR if inst.rs1() != 0 => Some(old & !src),
            _ => None,
        };
        if let Some(val) = new {
            self.csrs.write(addr, val);
        }
        trace!(csr = format_args!("{addr:#05x}"), old, new = ?new, "csr access");

        (inst.rd() != 0).then(|| WriteBack {
            rd: inst.rd(),
            data: old,
        })
    }
}

impl CsrUnit for CsrFile {
    fn start(&mut self, req: CsrRequest) {
        self.pending = Some((req, self.latency));
    }

    fn activate_trap(&mut self, info: TrapInfo) {
        let c = &mut self.csrs;
        c.mepc = info.pc & MEPC_MASK;
        c.mcause = info.cause();
        c.mtval = info.value();
        let mie = c.mstatus & MSTATUS_MIE != 0;
        c.mstatus &= !(MSTATUS_MIE | MSTATUS_MPIE);
        if mie {
            c.mstatus |= MSTATUS_MPIE;
        }
        debug!(
            trap = %info.trap,
            pc = format_args!("{:#010x}", info.pc),
            mtvec = format_args!("{:#010x}", c.mtvec),
            "trap entry"
        );
        self.jump = Some(c.mtvec);
    }

    fn return_trap(&mut self) {
        let c = &mut self.csrs;
        let mpie = c.mstatus & MSTATUS_MPIE != 0;
        c.mstatus &= !MSTATUS_MIE;
        if mpie {
            c.mstatus |= MSTATUS_MIE;
        }
        c.mstatus |= MSTATUS_MPIE;
        debug!(mepc = format_args!("{:#010x}", c.mepc), "trap return");
        self.jump = Some(c.mepc);
    }

    fn instret_pulse(&mut self) {
        self.csrs.minstret = self.csrs.minstret.wrapping_add(1);
    }

    fn set_pending(&mut self, bits: u32) {
        self.csrs.mip = bits & MIP_IMPLEMENTED;
    }

    fn wake(&self) -> bool {
        self.csrs.mip & self.csrs.mie != 0
    }

    fn peek(&self, addr: u32) -> u32 {
        self.csrs.read(addr)
    }

    fn cycle(&mut self) -> CsrResponse {
        self.csrs.mcycle = self.csrs.mcycle.wrapping_add(1);

        let trap_jump = self.jump.take();
        let mut resp = CsrResponse {
            trap_jump,
            ..CsrResponse::default()
        };

        if let Some((req, remaining)) = self.pending.as_mut() {
            *remaining -= 1;
            if *remaining == 0 {
                let req = *req;
                self.pending = None;
                resp.done = true;
                resp.write = self.execute(req);
            }
        }
        resp
    }
}
