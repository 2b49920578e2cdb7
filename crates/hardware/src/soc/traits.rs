//! Bus interfaces of the core.
//!
//! This module defines the two memory-side interfaces. It provides:
//! 1. **Data Bus:** Request/grant protocol used by the load-store unit, one outstanding
//!    request at a time.
//! 2. **Instruction Port:** Word fetch used by the fetch stage.

/// One data-bus request.
///
/// `addr` is word-aligned; `wmask` selects the bytes of `wdata` written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusRequest {
    /// Word-aligned byte address.
    pub addr: u32,
    /// Write data (little-endian lanes).
    pub wdata: u32,
    /// Byte write mask, one bit per lane.
    pub wmask: u8,
    /// Read request.
    pub read: bool,
    /// Write request.
    pub write: bool,
}

/// Data-bus response for the current cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusResponse {
    /// The request completed this cycle.
    pub grant: bool,
    /// Read data, valid with `grant` on a read.
    pub rdata: u32,
}

/// Memory-mapped data interface.
///
/// The requester holds the same request every cycle until it is granted.
/// There is no transaction ID.
pub trait DataBus {
    /// Presents a request for one cycle.
    ///
    /// # Arguments
    ///
    /// * `req` - The request (ignored unless `read` or `write` is set).
    ///
    /// # Returns
    ///
    /// Whether the request was granted this cycle, with read data.
    fn request(&mut self, req: &BusRequest) -> BusResponse;
}

/// Instruction fetch interface.
pub trait InstructionPort {
    /// Returns the 32-bit word at `addr`.
    fn fetch(&self, addr: u32) -> u32;
}
