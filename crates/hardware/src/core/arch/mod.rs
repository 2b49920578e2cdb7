//! RISC-V architecture-specific components.
//!
//! This module contains the implementation of core RISC-V architectural elements.
//! It includes the following modules:
//! 1. **CSRs:** Machine-mode Control and Status Register definitions and storage.
//! 2. **GPRs:** General-Purpose Register file with synchronous read ports.
//! 3. **Traps:** Exception detection, prioritization, and trap state.

/// Control and Status Register (CSR) definitions and access logic.
pub mod csr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Trap classification and trap state.
pub mod trap;
