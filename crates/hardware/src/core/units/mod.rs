//! Execution units and functional components.
//!
//! This module contains the collaborators of the pipeline stages: the shared
//! integer ALU used by execute, and the load-store and CSR/trap units driven
//! by the retire stage through the [`lsu::LoadStoreUnit`] and
//! [`csr::CsrUnit`] traits.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Machine-mode CSR and trap unit.
pub mod csr;

/// Load/Store Unit for memory access operations.
pub mod lsu;
