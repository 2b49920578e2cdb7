//! RV32I pipeline simulator library.
//!
//! This crate implements a cycle-level model of a small in-order RV32I core with the following:
//! 1. **Decode:** Immediate and ALU-control decoders feeding a two-cycle Decode Sequencer.
//! 2. **Retire:** A seven-state Retire Sequencer with write-back arbitration and trap sequencing.
//! 3. **Units:** Reference ALU, load-store unit, and machine-mode CSR/trap unit.
//! 4. **SoC:** Flat RAM behind a request/grant data bus.
//! 5. **Simulation:** Loader, configuration, run loop, and statistics collection.

/// Common types and constants (traps, host errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, pipeline, units, orchestration).
pub mod core;
/// Instruction set (field extraction, RV32I constants, decoders).
pub mod isa;
/// Binary loader and run loop.
pub mod sim;
/// System-on-chip (bus interfaces, memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline, units, memory, and stats.
pub use crate::core::Cpu;
/// Run loop; construct with `Simulator::new`.
pub use crate::sim::Simulator;
