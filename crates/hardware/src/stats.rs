//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics of the pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Loads, stores, CSR accesses, and taken branches.
//! 3. **Traps:** Trap entries and trap returns.
//! 4. **Stalls:** Decode back-pressure and retire-side unit waits.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of load instructions started.
    pub inst_load: u64,
    /// Count of store instructions started.
    pub inst_store: u64,
    /// Count of CSR instructions started.
    pub inst_csr: u64,
    /// Count of taken branches and jumps.
    pub branches_taken: u64,

    /// Number of traps taken.
    pub traps_taken: u64,
    /// Number of trap returns (MRET).
    pub trap_returns: u64,

    /// Cycles fetch offered an instruction decode could not accept.
    pub stalls_decode: u64,
    /// Cycles retire waited on the load-store or CSR unit.
    pub stalls_retire: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_csr: 0,
            branches_taken: 0,
            traps_taken: 0,
            trap_returns: 0,
            stalls_decode: 0,
            stalls_retire: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"stalls"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "stalls"];

impl SimStats {
    /// Returns instructions per cycle (0 before the first cycle).
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        if want("summary") {
            println!("\n==========================================================");
            println!("RV32I PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", self.ipc());
            println!("sim_cpi                  {:.4}", cyc / instr);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            println!(
                "  op.load                {} ({:.2}%)",
                self.inst_load,
                pct(self.inst_load, instr)
            );
            println!(
                "  op.store               {} ({:.2}%)",
                self.inst_store,
                pct(self.inst_store, instr)
            );
            println!(
                "  op.csr                 {} ({:.2}%)",
                self.inst_csr,
                pct(self.inst_csr, instr)
            );
            println!(
                "  branch.taken           {} ({:.2}%)",
                self.branches_taken,
                pct(self.branches_taken, instr)
            );
            println!("  trap.entries           {}", self.traps_taken);
            println!("  trap.returns           {}", self.trap_returns);
            println!("----------------------------------------------------------");
        }
        if want("stalls") {
            println!("STALLS");
            println!(
                "  stalls.decode          {} ({:.2}%)",
                self.stalls_decode,
                pct(self.stalls_decode, cyc)
            );
            println!(
                "  stalls.retire          {} ({:.2}%)",
                self.stalls_retire,
                pct(self.stalls_retire, cyc)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
