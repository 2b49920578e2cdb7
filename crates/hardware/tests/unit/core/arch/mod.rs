//! # Architectural Components
//!
//! This module provides tests for the architectural state of the core: the
//! register file, the machine-mode CSRs, and trap classification.


/// Register file reads, writes, and read ports.
pub mod gpr;
