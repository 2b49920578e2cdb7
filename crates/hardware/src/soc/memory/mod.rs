//! Physical System Memory.
//!
//! This module implements the flat RAM the core runs from. It provides:
//! 1. **Storage:** A byte vector mapped at a physical base address.
//! 2. **Data Bus:** Request/grant access with a configurable grant latency.
//! 3. **Instruction Port:** Zero-latency word fetch.
//! 4. **Loading:** Placement of program images before the run.
//!
//! Accesses outside the mapped range are granted normally; reads return 0
//! and writes are dropped.

use tracing::warn;

use crate::common::error::SimError;
use crate::soc::traits::{BusRequest, BusResponse, DataBus, InstructionPort};

/// Number of byte lanes of the data bus.
const LANES: u32 = 4;

/// Flat RAM with a request/grant data port.
#[derive(Clone, Debug)]
pub struct Ram {
    data: Vec<u8>,
    base: u32,
    latency: u64,
    waited: u64,
}

impl Ram {
    /// Creates a zero-filled RAM.
    ///
    /// # Arguments
    ///
    /// * `base` - Physical base address.
    /// * `size` - Size in bytes.
    /// * `latency` - Wait cycles before a data request is granted (0 = same cycle).
    pub fn new(base: u32, size: usize, latency: u64) -> Self {
        Self {
            data: vec![0; size],
            base,
            latency,
            waited: 0,
        }
    }

    /// Returns the physical base address.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Returns the size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    fn offset(&self, addr: u32) -> Option<usize> {
        let off = addr.wrapping_sub(self.base) as usize;
        (addr >= self.base && off < self.data.len()).then_some(off)
    }

    /// Copies an image into memory.
    ///
    /// # Arguments
    ///
    /// * `addr` - Physical load address.
    /// * `bytes` - Image contents.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or [`SimError::ImageOutOfRange`] if the image does not fit.
    pub fn load(&mut self, addr: u32, bytes: &[u8]) -> Result<(), SimError> {
        let out_of_range = || SimError::ImageOutOfRange {
            addr,
            len: bytes.len(),
            base: self.base,
            size: self.data.len(),
        };
        let start = self.offset(addr).ok_or_else(out_of_range)?;
        let end = start
            .checked_add(bytes.len())
            .filter(|&e| e <= self.data.len())
            .ok_or_else(out_of_range)?;
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Reads one byte (0 outside the mapped range).
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.offset(addr).map_or(0, |off| self.data[off])
    }

    /// Writes one byte (dropped outside the mapped range).
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        if let Some(off) = self.offset(addr) {
            self.data[off] = val;
        }
    }

    /// Reads a little-endian word.
    pub fn read_u32(&self, addr: u32) -> u32 {
        (0..LANES).fold(0, |acc, i| {
            acc | (u32::from(self.read_u8(addr.wrapping_add(i))) << (8 * i))
        })
    }

    /// Writes a little-endian word.
    pub fn write_u32(&mut self, addr: u32, val: u32) {
        for i in 0..LANES {
            self.write_u8(addr.wrapping_add(i), (val >> (8 * i)) as u8);
        }
    }
}

impl DataBus for Ram {
    fn request(&mut self, req: &BusRequest) -> BusResponse {
        if !req.read && !req.write {
            self.waited = 0;
            return BusResponse::default();
        }
        if self.waited < self.latency {
            self.waited += 1;
            return BusResponse::default();
        }
        self.waited = 0;

        if self.offset(req.addr).is_none() {
            warn!(
                addr = format_args!("{:#010x}", req.addr),
                "data access outside memory"
            );
        }

        let rdata = if req.read { self.read_u32(req.addr) } else { 0 };
        if req.write {
            for lane in 0..LANES {
                if req.wmask & (1 << lane) != 0 {
                    self.write_u8(req.addr.wrapping_add(lane), (req.wdata >> (8 * lane)) as u8);
                }
            }
        }
        BusResponse { grant: true, rdata }
    }
}

impl InstructionPort for Ram {
    fn fetch(&self, addr: u32) -> u32 {
        self.read_u32(addr)
    }
}
