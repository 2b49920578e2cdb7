//! CPU Core Definition and Clocking.
//!
//! This module defines the central `Cpu` structure, which owns every stage and unit of
//! the core. It coordinates the following:
//! 1. **State Management:** Register file, pipeline stages, and the two retire-side units.
//! 2. **Clocking:** One call to [`Cpu::tick`] evaluates one clock edge across all stages.
//! 3. **Memory:** Instruction fetch and the data bus share a single RAM.
//! 4. **Statistics:** Retirement, trap, and stall counters.
//!
//! Stages are evaluated from retire back to fetch. Each stage computes its
//! handshake from the state before the edge, and the register write of the
//! edge is applied before decode samples its read ports.

use tracing::info;

use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::trap::TrapInfo;
use crate::core::pipeline::stages::writeback::WriteSource;
use crate::core::pipeline::stages::{
    DecodeStage, ExecuteStage, FetchStage, RetireInputs, RetireStage, RetireState,
};
use crate::core::units::csr::{CsrFile, CsrUnit};
use crate::core::units::lsu::{LoadStoreUnit, Lsu};
use crate::soc::memory::Ram;
use crate::stats::SimStats;

/// Observable events of one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// The instruction-retired pulse was high.
    pub retired: bool,
    /// A trap was activated.
    pub trap: Option<TrapInfo>,
    /// Fetch was redirected.
    pub redirect: Option<u32>,
    /// Register write performed.
    pub write_back: Option<WriteSource>,
}

/// Main CPU structure containing all processor state and components.
pub struct Cpu {
    /// General-purpose register file.
    pub regs: Gpr,
    /// Fetch stage.
    pub fetch: FetchStage,
    /// Decode Sequencer.
    pub decode: DecodeStage,
    /// Execute stage.
    pub execute: ExecuteStage,
    /// Retire Sequencer.
    pub retire: RetireStage,
    /// Load-store unit.
    pub lsu: Box<dyn LoadStoreUnit>,
    /// CSR and trap unit.
    pub csr: Box<dyn CsrUnit>,
    /// Instruction and data memory.
    pub memory: Ram,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with the reference units described by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with empty memory and all stages idle at `start_pc`.
    pub fn new(config: &Config) -> Self {
        let memory = Ram::new(
            config.memory.base,
            config.memory.size,
            config.memory.latency,
        );
        let csr = CsrFile::new(config.csr.mtvec, config.csr.hart_id, config.csr.latency);
        Self::with_units(
            config.general.start_pc,
            memory,
            Box::new(Lsu::new()),
            Box::new(csr),
        )
    }

    /// Creates a CPU from explicit components.
    ///
    /// # Arguments
    ///
    /// * `start_pc` - Reset fetch address.
    /// * `memory` - Instruction and data memory.
    /// * `lsu` - Load-store unit.
    /// * `csr` - CSR and trap unit.
    pub fn with_units(
        start_pc: u32,
        memory: Ram,
        lsu: Box<dyn LoadStoreUnit>,
        csr: Box<dyn CsrUnit>,
    ) -> Self {
        Self {
            regs: Gpr::new(),
            fetch: FetchStage::new(start_pc),
            decode: DecodeStage::new(),
            execute: ExecuteStage::new(),
            retire: RetireStage::new(),
            lsu,
            csr,
            memory,
            stats: SimStats::default(),
        }
    }

    /// Returns `true` if no instruction is in decode, execute, or retire.
    pub fn pipeline_empty(&self) -> bool {
        self.decode.is_empty()
            && self.execute.is_empty()
            && self.retire.state() == RetireState::Steady
    }

    /// Evaluates one clock edge.
    ///
    /// # Returns
    ///
    /// The retirement, trap, redirect, and write-back events of this edge.
    pub fn tick(&mut self) -> CycleReport {
        self.stats.cycles += 1;

        let lsu = self.lsu.cycle(&mut self.memory);
        let csr = self.csr.cycle();
        let wake = self.csr.wake();
        let pipeline_empty = self.pipeline_empty();

        if matches!(self.retire.state(), RetireState::Lsu | RetireState::Csr) {
            self.stats.stalls_retire += 1;
        }

        let out = self.retire.tick(RetireInputs {
            op: self.execute.output(),
            lsu,
            csr,
            wake,
        });

        let wb = out.write_back.map(WriteSource::write);
        if let Some(w) = wb {
            self.regs.write(w.rd, w.data);
        }
        if let Some(req) = out.lsu_start {
            if req.store {
                self.stats.inst_store += 1;
            } else {
                self.stats.inst_load += 1;
            }
            self.lsu.start(req);
        }
        if let Some(req) = out.csr_start {
            self.stats.inst_csr += 1;
            self.csr.start(req);
        }
        if let Some(info) = out.activate_trap {
            self.stats.traps_taken += 1;
            self.csr.activate_trap(info);
        }
        if out.return_trap {
            self.stats.trap_returns += 1;
            self.csr.return_trap();
        }
        if out.retired {
            self.stats.instructions_retired += 1;
            self.csr.instret_pulse();
        }
        if out.accepted && out.redirect.is_some() {
            self.stats.branches_taken += 1;
        }

        let exec_ready = self.execute.in_ready(out.accepted);
        let handoff = self.decode.output().copied().filter(|_| exec_ready);
        self.execute.tick(handoff, out.accepted, wb);

        let fetched = self.fetch.output(&self.memory, pipeline_empty);
        let accepted = self.decode.tick(fetched, exec_ready, &mut self.regs, wb);
        if fetched.is_some() && !accepted {
            self.stats.stalls_decode += 1;
        }

        let consumed = fetched.filter(|_| accepted);
        let drained = self.pipeline_empty();
        self.fetch.tick(consumed, drained, out.redirect);

        CycleReport {
            retired: out.retired,
            trap: out.activate_trap,
            redirect: out.redirect,
            write_back: out.write_back,
        }
    }

    /// Dumps the current CPU state (fetch PC and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.fetch.pc());
        self.regs.dump();
    }

    /// Logs a one-line summary of the pipeline occupancy.
    pub fn log_pipeline(&self) {
        info!(
            pc = format_args!("{:#010x}", self.fetch.pc()),
            decode = ?self.decode.state(),
            execute_busy = !self.execute.is_empty(),
            retire = ?self.retire.state(),
            "pipeline"
        );
    }
}
