//! Control and Status Register (CSR) definitions and operations.
//!
//! This module implements the machine-mode CSR subset of the core. It provides:
//! 1. **Address Definitions:** Constants for the supported machine and user CSRs.
//! 2. **Field Masks:** Bitmasks for status, interrupt, and ISA fields.
//! 3. **Register Storage:** The `Csrs` struct for maintaining architectural state.
//! 4. **Access Logic:** Read and write operations applying the WARL rules of each register.

/// Machine vendor ID CSR address.
pub const MVENDORID: u32 = 0xF11;

/// Machine architecture ID CSR address.
pub const MARCHID: u32 = 0xF12;

/// Machine implementation ID CSR address.
pub const MIMPID: u32 = 0xF13;

/// Machine hardware thread ID CSR address.
pub const MHARTID: u32 = 0xF14;

/// Machine status register CSR address.
pub const MSTATUS: u32 = 0x300;

/// Machine ISA register CSR address.
pub const MISA: u32 = 0x301;

/// Machine interrupt enable register CSR address.
pub const MIE: u32 = 0x304;

/// Machine trap vector base address register CSR address.
pub const MTVEC: u32 = 0x305;

/// Machine scratch register CSR address.
pub const MSCRATCH: u32 = 0x340;

/// Machine exception program counter CSR address.
pub const MEPC: u32 = 0x341;

/// Machine cause register CSR address.
pub const MCAUSE: u32 = 0x342;

/// Machine trap value register CSR address.
pub const MTVAL: u32 = 0x343;

/// Machine interrupt pending register CSR address.
pub const MIP: u32 = 0x344;

/// Machine cycle counter, low half.
pub const MCYCLE: u32 = 0xB00;

/// Machine instructions-retired counter, low half.
pub const MINSTRET: u32 = 0xB02;

/// Machine cycle counter, high half.
pub const MCYCLEH: u32 = 0xB80;

/// Machine instructions-retired counter, high half.
pub const MINSTRETH: u32 = 0xB82;

/// User cycle counter shadow, low half.
pub const CYCLE: u32 = 0xC00;

/// User instructions-retired shadow, low half.
pub const INSTRET: u32 = 0xC02;

/// User cycle counter shadow, high half.
pub const CYCLEH: u32 = 0xC80;

/// User instructions-retired shadow, high half.
pub const INSTRETH: u32 = 0xC82;

/// Machine interrupt enable bit in `mstatus`.
pub const MSTATUS_MIE: u32 = 1 << 3;

/// Previous machine interrupt enable bit in `mstatus`.
pub const MSTATUS_MPIE: u32 = 1 << 7;

/// Previous privilege field in `mstatus`, fixed to machine mode.
pub const MSTATUS_MPP: u32 = 3 << 11;

/// Writable bits of `mstatus`.
pub const MSTATUS_WRITABLE: u32 = MSTATUS_MIE | MSTATUS_MPIE;

/// Machine software interrupt enable.
pub const MIE_MSIE: u32 = 1 << 3;

/// Machine timer interrupt enable.
pub const MIE_MTIE: u32 = 1 << 7;

/// Machine external interrupt enable.
pub const MIE_MEIE: u32 = 1 << 11;

/// Writable bits of `mie`.
pub const MIE_WRITABLE: u32 = MIE_MSIE | MIE_MTIE | MIE_MEIE;

/// Machine software interrupt pending.
pub const MIP_MSIP: u32 = 1 << 3;

/// Machine timer interrupt pending.
pub const MIP_MTIP: u32 = 1 << 7;

/// Machine external interrupt pending.
pub const MIP_MEIP: u32 = 1 << 11;

/// Implemented bits of `mip`.
pub const MIP_IMPLEMENTED: u32 = MIP_MSIP | MIP_MTIP | MIP_MEIP;

/// Base-address mask of `mtvec` (direct mode only).
pub const MTVEC_BASE_MASK: u32 = !0b11;

/// Alignment mask of `mepc` (no compressed instructions).
pub const MEPC_MASK: u32 = !0b11;

/// MISA XLEN field value for 32-bit architecture.
pub const MISA_XLEN_32: u32 = 1 << 30;

/// MISA base integer ISA bit.
pub const MISA_EXT_I: u32 = 1 << 8;

/// Reset value of `misa` (RV32I).
pub const MISA_RV32I: u32 = MISA_XLEN_32 | MISA_EXT_I;

/// Control and Status Register file.
///
/// Contains the machine-mode CSRs controlling interrupts and traps, and the
/// 64-bit performance counters exposed as low/high halves.
#[derive(Clone, Debug)]
pub struct Csrs {
    /// Machine status register (MIE and MPIE stored; MPP reads as M).
    pub mstatus: u32,
    /// Machine ISA register.
    pub misa: u32,
    /// Machine interrupt enable.
    pub mie: u32,
    /// Machine trap vector base address.
    pub mtvec: u32,
    /// Machine scratch register.
    pub mscratch: u32,
    /// Machine exception program counter.
    pub mepc: u32,
    /// Machine trap cause.
    pub mcause: u32,
    /// Machine trap value.
    pub mtval: u32,
    /// Machine interrupt pending (driven by external lines).
    pub mip: u32,
    /// Hardware thread ID.
    pub mhartid: u32,
    /// Machine cycle counter.
    pub mcycle: u64,
    /// Machine instructions retired counter.
    pub minstret: u64,
}

impl Default for Csrs {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Csrs {
    /// Creates the reset CSR state.
    ///
    /// # Arguments
    ///
    /// * `mtvec` - Reset trap vector (low two bits are cleared).
    /// * `hart_id` - Value of `mhartid`.
    pub const fn new(mtvec: u32, hart_id: u32) -> Self {
        Self {
            mstatus: 0,
            misa: MISA_RV32I,
            mie: 0,
            mtvec: mtvec & MTVEC_BASE_MASK,
            mscratch: 0,
            mepc: 0,
            mcause: 0,
            mtval: 0,
            mip: 0,
            mhartid: hart_id,
            mcycle: 0,
            minstret: 0,
        }
    }

    /// Reads a CSR value by its address.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    ///
    /// # Returns
    ///
    /// The 32-bit value of the CSR, or 0 if the address is not recognized.
    pub const fn read(&self, addr: u32) -> u32 {
        match addr {
            MSTATUS => self.mstatus | MSTATUS_MPP,
            MISA => self.misa,
            MIE => self.mie,
            MTVEC => self.mtvec,
            MSCRATCH => self.mscratch,
            MEPC => self.mepc,
            MCAUSE => self.mcause,
            MTVAL => self.mtval,
            MIP => self.mip,
            MHARTID => self.mhartid,
            MCYCLE | CYCLE => self.mcycle as u32,
            MCYCLEH | CYCLEH => (self.mcycle >> 32) as u32,
            MINSTRET | INSTRET => self.minstret as u32,
            MINSTRETH | INSTRETH => (self.minstret >> 32) as u32,
            _ => 0,
        }
    }

    /// Writes a value to a CSR by its address.
    ///
    /// Read-only and unknown addresses ignore the write.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, addr: u32, val: u32) {
        match addr {
            MSTATUS => self.mstatus = val & MSTATUS_WRITABLE,
            MIE => self.mie = val & MIE_WRITABLE,
            MTVEC => self.mtvec = val & MTVEC_BASE_MASK,
            MSCRATCH => self.mscratch = val,
            MEPC => self.mepc = val & MEPC_MASK,
            MCAUSE => self.mcause = val,
            MTVAL => self.mtval = val,
            MCYCLE => self.mcycle = (self.mcycle & !0xFFFF_FFFF) | val as u64,
            MCYCLEH => self.mcycle = (self.mcycle & 0xFFFF_FFFF) | ((val as u64) << 32),
            MINSTRET => self.minstret = (self.minstret & !0xFFFF_FFFF) | val as u64,
            MINSTRETH => self.minstret = (self.minstret & 0xFFFF_FFFF) | ((val as u64) << 32),
            _ => {}
        }
    }

    /// Returns `true` if `mstatus.MIE` is set.
    pub const fn interrupts_enabled(&self) -> bool {
        self.mstatus & MSTATUS_MIE != 0
    }
}
