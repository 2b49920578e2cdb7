//! Core processor implementation.
//!
//! This module contains the pipelined core: architectural state, the
//! pipeline stages, the execution units, and the orchestrator that clocks
//! them together.

/// Architecture-specific components (CSRs, register file, traps).
pub mod arch;

/// CPU core and clock-edge orchestration.
pub mod cpu;

/// Instruction pipeline implementation (latches, signals, stages).
pub mod pipeline;

/// Execution units (ALU, LSU, CSR/trap unit).
pub mod units;

pub use self::cpu::Cpu;
