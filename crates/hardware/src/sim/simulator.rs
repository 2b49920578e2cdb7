//! Simulator: owns the CPU and drives it to an exit condition.
//!
//! A run ends when the cycle limit is reached or, in direct mode, at the
//! first trap activation. Outside direct mode traps vector to `mtvec` and
//! the program keeps running.

use tracing::{debug, info};

use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::trap::TrapInfo;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The configured cycle limit was reached.
    CycleLimit,
    /// A trap was activated in direct mode.
    Trap(TrapInfo),
}

/// Summary of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Cycles simulated.
    pub cycles: u64,
    /// Instructions retired.
    pub retired: u64,
    /// Exit condition.
    pub exit: ExitReason,
}

/// Top-level simulator.
pub struct Simulator {
    /// The simulated core.
    pub cpu: Cpu,
    /// End the run at the first trap.
    pub direct_mode: bool,
    /// Cycle limit.
    pub max_cycles: u64,
    trace: bool,
}

impl Simulator {
    /// Creates a simulator with a fresh CPU built from `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_cpu(Cpu::new(config), config)
    }

    /// Wraps an existing CPU, taking the run limits from `config`.
    pub fn with_cpu(cpu: Cpu, config: &Config) -> Self {
        Self {
            cpu,
            direct_mode: config.general.direct_mode,
            max_cycles: config.general.max_cycles,
            trace: config.general.trace_instructions,
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Returns
    ///
    /// The activated trap, if any.
    pub fn tick(&mut self) -> Option<TrapInfo> {
        let report = self.cpu.tick();
        if self.trace {
            self.cpu.log_pipeline();
        }
        if let Some(wb) = report.write_back {
            debug!(source = ?wb, "write back");
        }
        report.trap
    }

    /// Runs until the cycle limit or, in direct mode, the first trap.
    pub fn run(&mut self) -> RunOutcome {
        let mut exit = ExitReason::CycleLimit;
        while self.cpu.stats.cycles < self.max_cycles {
            if let Some(info) = self.tick() {
                if self.direct_mode {
                    exit = ExitReason::Trap(info);
                    break;
                }
            }
        }

        let outcome = RunOutcome {
            cycles: self.cpu.stats.cycles,
            retired: self.cpu.stats.instructions_retired,
            exit,
        };
        info!(
            cycles = outcome.cycles,
            retired = outcome.retired,
            exit = ?outcome.exit,
            "run finished"
        );
        outcome
    }
}
