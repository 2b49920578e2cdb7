//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit driven by the retire stage. It performs the following:
//! 1. **Sizing:** Byte, half, and word accesses selected by funct3.
//! 2. **Alignment:** Accesses crossing a word boundary become two aligned bus beats.
//! 3. **Completion:** A `done` pulse in the cycle the last beat is granted, with the load result.
//!
//! Submodules:
//! - [`unaligned`]: beat splitting and load-data extraction.

/// Beat splitting and load data extraction.
pub mod unaligned;

use tracing::{debug, trace};

use self::unaligned::{Beat, access_size, extract_load, split};
use crate::core::pipeline::latches::WriteBack;
use crate::soc::traits::{BusRequest, DataBus};

/// Start request from the retire stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LsuRequest {
    /// Byte address.
    pub addr: u32,
    /// Store data.
    pub data: u32,
    /// Size/sign selector.
    pub funct3: u32,
    /// Load destination register.
    pub rd: usize,
    /// Store (`true`) or load (`false`).
    pub store: bool,
}

/// Per-cycle output of the load-store unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LsuResponse {
    /// The access completed this cycle.
    pub done: bool,
    /// Register write for a completed load.
    pub write: Option<WriteBack>,
}

/// Load-store unit contract seen by the retire stage.
pub trait LoadStoreUnit {
    /// Starts an access. Ignored while another access is in flight.
    fn start(&mut self, req: LsuRequest);

    /// Advances one cycle against the data bus.
    fn cycle(&mut self, bus: &mut dyn DataBus) -> LsuResponse;

    /// Returns `true` while an access is in flight.
    fn busy(&self) -> bool;
}

#[derive(Clone, Copy, Debug)]
struct Access {
    req: LsuRequest,
    beats: [Beat; 2],
    count: usize,
    next: usize,
    raw: u64,
}

/// Reference load-store unit.
#[derive(Clone, Debug, Default)]
pub struct Lsu {
    active: Option<Access>,
}

impl Lsu {
    /// Creates an idle unit.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadStoreUnit for Lsu {
    fn start(&mut self, req: LsuRequest) {
        if self.active.is_some() {
            return;
        }
        let (beats, count) = split(req.addr, access_size(req.funct3), req.data);
        debug!(
            addr = format_args!("{:#010x}", req.addr),
            store = req.store,
            beats = count,
            "lsu start"
        );
        self.active = Some(Access {
            req,
            beats,
            count,
            next: 0,
            raw: 0,
        });
    }

    fn cycle(&mut self, bus: &mut dyn DataBus) -> LsuResponse {
        let Some(access) = self.active.as_mut() else {
            return LsuResponse::default();
        };

        let beat = access.beats[access.next];
        let resp = bus.request(&BusRequest {
            addr: beat.addr,
            wdata: beat.wdata,
            wmask: if access.req.store { beat.mask } else { 0 },
            read: !access.req.store,
            write: access.req.store,
        });
        if !resp.grant {
            return LsuResponse::default();
        }

        trace!(
            addr = format_args!("{:#010x}", beat.addr),
            "lsu beat granted"
        );
        access.raw |= u64::from(resp.rdata) << (32 * access.next);
        access.next += 1;
        if access.next < access.count {
            return LsuResponse::default();
        }

        let req = access.req;
        let raw = access.raw;
        self.active = None;
        let write = (!req.store).then(|| WriteBack {
            rd: req.rd,
            data: extract_load(raw, req.addr, req.funct3),
        });
        LsuResponse { done: true, write }
    }

    fn busy(&self) -> bool {
        self.active.is_some()
    }
}
