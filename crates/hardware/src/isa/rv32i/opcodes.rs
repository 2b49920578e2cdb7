//! RV32I opcode types.
//!
//! Each constant is the 5-bit `opcode_type` (instruction bits 6-2). The two
//! low opcode bits are `0b11` for every 32-bit encoding and are not part of
//! the key.

/// Load instructions (LB, LH, LW, LBU, LHU).
pub const OP_LOAD: u32 = 0b00_000;

/// Memory ordering instructions (FENCE, FENCE.I).
pub const OP_MISC_MEM: u32 = 0b00_011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b00_100;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b00_101;

/// Store instructions (SB, SH, SW).
pub const OP_STORE: u32 = 0b01_000;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b01_100;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b01_101;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b11_000;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b11_001;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b11_011;

/// System instructions (CSR access, ECALL, EBREAK, MRET, WFI).
pub const OP_SYSTEM: u32 = 0b11_100;

/// Expands an opcode type into the full 7-bit opcode.
pub const fn opcode(opcode_type: u32) -> u32 {
    (opcode_type << 2) | 0b11
}
