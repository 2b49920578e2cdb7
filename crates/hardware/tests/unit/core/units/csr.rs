//! CSR and Trap Unit Tests.
//!
//! Covers the CSR access instructions, completion latency, trap entry and
//! return, the counters, and WFI wake-up.

use crate::common::builder::instruction::InstructionBuilder;
use pretty_assertions::assert_eq;
use rvpipe_core::common::error::Trap;
use rvpipe_core::core::arch::csr::*;
use rvpipe_core::core::arch::trap::TrapInfo;
use rvpipe_core::core::pipeline::latches::WriteBack;
use rvpipe_core::core::units::csr::{CsrFile, CsrRequest, CsrResponse, CsrUnit};

const MTVEC_RESET: u32 = 0x8000_0100;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

fn unit() -> CsrFile {
    CsrFile::new(MTVEC_RESET, 0, 1)
}

/// Starts an access and clocks until done.
fn access(csr: &mut CsrFile, inst: u32, wdata: u32) -> CsrResponse {
    csr.start(CsrRequest { inst, wdata });
    for _ in 0..16 {
        let resp = csr.cycle();
        if resp.done {
            return resp;
        }
    }
    panic!("csr access did not complete");
}

// ─── Access instructions ───────────────────────────────────────────────────

#[test]
fn csrrw_swaps_and_returns_old_value() {
    let mut csr = unit();
    let resp = access(&mut csr, b().csrrw(1, MSCRATCH, 2).build(), 0x55);
    assert_eq!(resp.write, Some(WriteBack { rd: 1, data: 0 }));
    assert_eq!(csr.peek(MSCRATCH), 0x55);

    let resp = access(&mut csr, b().csrrw(3, MSCRATCH, 2).build(), 0x66);
    assert_eq!(resp.write, Some(WriteBack { rd: 3, data: 0x55 }));
}

#[test]
fn csrrw_to_x0_writes_without_write_back() {
    let mut csr = unit();
    let resp = access(&mut csr, b().csrrw(0, MSCRATCH, 2).build(), 0x99);
    assert_eq!(resp.write, None);
    assert!(resp.done);
    assert_eq!(csr.peek(MSCRATCH), 0x99);
}

#[test]
fn set_and_clear_with_x0_source_do_not_write() {
    let mut csr = unit();
    let _ = access(&mut csr, b().csrrw(0, MSCRATCH, 2).build(), 0xF0);

    let resp = access(&mut csr, b().csrrs(1, MSCRATCH, 0).build(), 0xFFFF_FFFF);
    assert_eq!(resp.write, Some(WriteBack { rd: 1, data: 0xF0 }));
    assert_eq!(csr.peek(MSCRATCH), 0xF0);

    let _ = access(&mut csr, b().csrrc(1, MSCRATCH, 0).build(), 0xFFFF_FFFF);
    assert_eq!(csr.peek(MSCRATCH), 0xF0);
}

#[test]
fn set_and_clear_bits() {
    let mut csr = unit();
    let _ = access(&mut csr, b().csrrs(0, MSCRATCH, 5).build(), 0b1010);
    let _ = access(&mut csr, b().csrrs(0, MSCRATCH, 5).build(), 0b0101);
    assert_eq!(csr.peek(MSCRATCH), 0b1111);
    let _ = access(&mut csr, b().csrrc(0, MSCRATCH, 5).build(), 0b0110);
    assert_eq!(csr.peek(MSCRATCH), 0b1001);
}

#[test]
fn immediate_forms_use_zimm() {
    let mut csr = unit();
    let _ = access(&mut csr, b().csrrsi(0, MIE, 8).build(), 0xFFFF_FFFF);
    assert_eq!(csr.peek(MIE), MIE_MSIE);
    let _ = access(&mut csr, b().csrrwi(0, MSCRATCH, 31).build(), 0);
    assert_eq!(csr.peek(MSCRATCH), 31);
}

#[test]
fn latency_delays_done() {
    let mut csr = CsrFile::new(MTVEC_RESET, 0, 3);
    csr.start(CsrRequest {
        inst: b().csrrs(1, MHARTID, 0).build(),
        wdata: 0,
    });
    assert!(!csr.cycle().done);
    assert!(!csr.cycle().done);
    assert!(csr.cycle().done);
    assert!(!csr.cycle().done);
}

#[test]
fn zero_latency_is_raised_to_one() {
    let mut csr = CsrFile::new(MTVEC_RESET, 0, 0);
    csr.start(CsrRequest {
        inst: b().csrrs(1, MISA, 0).build(),
        wdata: 0,
    });
    let resp = csr.cycle();
    assert!(resp.done);
    assert_eq!(resp.write.map(|w| w.data), Some(MISA_RV32I));
}

// ─── Traps ─────────────────────────────────────────────────────────────────

#[test]
fn trap_entry_saves_state_and_jumps_next_cycle() {
    let mut csr = unit();
    let _ = access(&mut csr, b().csrrsi(0, MSTATUS, 8).build(), 0);
    assert!(csr.csrs().interrupts_enabled());

    csr.activate_trap(TrapInfo {
        trap: Trap::Breakpoint(0x8000_0010),
        pc: 0x8000_0010,
    });
    assert_eq!(csr.peek(MEPC), 0x8000_0010);
    assert_eq!(csr.peek(MCAUSE), 3);
    assert_eq!(csr.peek(MTVAL), 0x8000_0010);
    assert_eq!(
        csr.peek(MSTATUS) & (MSTATUS_MIE | MSTATUS_MPIE),
        MSTATUS_MPIE
    );

    assert_eq!(csr.cycle().trap_jump, Some(MTVEC_RESET));
    assert_eq!(csr.cycle().trap_jump, None);
}

#[test]
fn trap_entry_uses_updated_mtvec() {
    let mut csr = unit();
    let _ = access(&mut csr, b().csrrw(0, MTVEC, 1).build(), 0x8000_0203);
    csr.activate_trap(TrapInfo {
        trap: Trap::EnvironmentCall,
        pc: 0x8000_0000,
    });
    assert_eq!(csr.cycle().trap_jump, Some(0x8000_0200));
    assert_eq!(csr.peek(MCAUSE), 11);
    assert_eq!(csr.peek(MTVAL), 0);
}

#[test]
fn trap_return_restores_interrupt_enable() {
    let mut csr = unit();
    let _ = access(&mut csr, b().csrrsi(0, MSTATUS, 8).build(), 0);
    csr.activate_trap(TrapInfo {
        trap: Trap::IllegalInstruction(0),
        pc: 0x8000_0040,
    });
    let _ = csr.cycle();

    csr.return_trap();
    let status = csr.peek(MSTATUS);
    assert_ne!(status & MSTATUS_MIE, 0);
    assert_ne!(status & MSTATUS_MPIE, 0);
    assert_eq!(csr.cycle().trap_jump, Some(0x8000_0040));
}

// ─── Counters and wake-up ──────────────────────────────────────────────────

#[test]
fn counters_track_cycles_and_retirements() {
    let mut csr = unit();
    for _ in 0..10 {
        let _ = csr.cycle();
    }
    csr.instret_pulse();
    csr.instret_pulse();
    assert_eq!(csr.peek(MCYCLE), 10);
    assert_eq!(csr.peek(CYCLE), 10);
    assert_eq!(csr.peek(MINSTRET), 2);
    assert_eq!(csr.peek(INSTRET), 2);
}

#[test]
fn wake_requires_pending_and_enabled() {
    let mut csr = unit();
    csr.set_pending(MIP_MTIP);
    assert!(!csr.wake());
    let _ = access(&mut csr, b().csrrw(0, MIE, 1).build(), MIE_MTIE);
    assert!(csr.wake());
    csr.set_pending(0);
    assert!(!csr.wake());
}

#[test]
fn pending_lines_are_masked() {
    let mut csr = unit();
    csr.set_pending(0xFFFF_FFFF);
    assert_eq!(csr.peek(MIP), MIP_IMPLEMENTED);
}
