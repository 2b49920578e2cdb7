//! RISC-V Privileged Architecture Opcodes.
//!
//! Full encodings of the `funct3 = 0` system instructions and the funct3
//! codes of the CSR access instructions.

/// Environment Call (ECALL).
/// Traps to the machine-mode handler.
pub const ECALL: u32 = 0x0000_0073;

/// Environment Break (EBREAK).
/// Used by debuggers to cause a breakpoint trap.
pub const EBREAK: u32 = 0x0010_0073;

/// Machine Return (MRET).
/// Returns from M-mode trap handler.
pub const MRET: u32 = 0x3020_0073;

/// Wait for Interrupt (WFI).
/// Stalls retirement until an interrupt becomes pending.
pub const WFI: u32 = 0x1050_0073;

/// funct3 of ECALL, EBREAK, MRET, and WFI.
pub const PRIV: u32 = 0b000;
/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u32 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u32 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u32 = 0b011;
/// Reserved SYSTEM funct3 (illegal).
pub const RESERVED: u32 = 0b100;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u32 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u32 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u32 = 0b111;

/// Immediate-source bit of a CSR funct3 (source is the 5-bit `zimm`).
pub const CSR_IMM_BIT: u32 = 0b100;
/// Operation field of a CSR funct3 (01 = write, 10 = set, 11 = clear).
pub const CSR_OP_MASK: u32 = 0b011;
