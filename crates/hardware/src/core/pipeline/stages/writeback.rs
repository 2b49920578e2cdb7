//! Write-Back Arbiter.
//!
//! This module implements the single register write port's priority chain.
//! Three producers can request the port; the highest-priority active one wins:
//! 1. **CSR:** The old CSR value of a completing CSR instruction.
//! 2. **Load:** The data of a completing load.
//! 3. **Direct:** The primary result of an instruction completing in STEADY.
//!
//! The retire sequencer ensures at most one producer is active in practice;
//! the fixed order makes the choice deterministic regardless.

use crate::core::pipeline::latches::WriteBack;

/// Producer that owns the write port in a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteSource {
    /// CSR unit read data.
    Csr(WriteBack),
    /// Load-store unit load data.
    Load(WriteBack),
    /// Direct ALU result.
    Direct(WriteBack),
}

impl WriteSource {
    /// Returns the register write regardless of producer.
    pub const fn write(self) -> WriteBack {
        match self {
            Self::Csr(wb) | Self::Load(wb) | Self::Direct(wb) => wb,
        }
    }
}

/// Selects the register write for this cycle.
///
/// # Arguments
///
/// * `csr` - CSR unit write request.
/// * `load` - Load-store unit write request.
/// * `direct` - Direct write request from the retire sequencer.
///
/// # Returns
///
/// The winning producer, or `None` if no producer is active.
pub fn arbitrate(
    csr: Option<WriteBack>,
    load: Option<WriteBack>,
    direct: Option<WriteBack>,
) -> Option<WriteSource> {
    csr.map(WriteSource::Csr)
        .or_else(|| load.map(WriteSource::Load))
        .or_else(|| direct.map(WriteSource::Direct))
}
