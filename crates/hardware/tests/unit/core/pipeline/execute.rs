//! # Execute Stage Tests
//!
//! Result routing for each instruction class, the holding register's
//! handshake, and snooping while a micro-op waits for retire.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::builder::pipeline_state::{DecodedOpBuilder, FetchPacketBuilder};
use rvpipe_core::core::arch::gpr::Gpr;
use rvpipe_core::core::pipeline::latches::{DecodedOp, ExecutedOp, WriteBack};
use rvpipe_core::core::pipeline::stages::{DecodeStage, ExecuteStage};

const PC: u32 = 0x8000_0100;

fn decoded(inst: u32, regs: &mut Gpr) -> DecodedOp {
    let mut stage = DecodeStage::new();
    let pkt = FetchPacketBuilder::new().pc(PC).inst(inst).build();
    let _ = stage.tick(Some(pkt), false, regs, None);
    let _ = stage.tick(None, false, regs, None);
    *stage.output().expect("decode produced no micro-op")
}

fn executed(inst: u32, regs: &mut Gpr) -> ExecutedOp {
    ExecuteStage::execute(&decoded(inst, regs))
}

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

fn regs_with(values: &[(usize, u32)]) -> Gpr {
    let mut regs = Gpr::new();
    for &(idx, val) in values {
        regs.write(idx, val);
    }
    regs
}

// ─── Result routing ────────────────────────────────────────────────────────

#[test]
fn alu_result_is_primary() {
    let mut regs = regs_with(&[(1, 5), (2, 7)]);
    let ex = executed(b().sub(3, 1, 2).build(), &mut regs);
    assert_eq!(ex.result1, (-2_i32) as u32);
    assert_eq!(ex.rd, 3);
    assert!(ex.ctrl.rd_write);
}

#[test]
fn jal_links_and_targets() {
    let mut regs = Gpr::new();
    let ex = executed(b().jal(1, -16).build(), &mut regs);
    assert_eq!(ex.result1, PC + 4);
    assert_eq!(ex.result2, PC - 16);
    assert!(ex.taken());
}

#[test]
fn jalr_clears_target_bit_zero() {
    let mut regs = regs_with(&[(5, 0x8000_0201)]);
    let ex = executed(b().jalr(1, 5, 2).build(), &mut regs);
    assert_eq!(ex.result1, PC + 4);
    assert_eq!(ex.result2, 0x8000_0202);
}

#[test]
fn branch_carries_comparison_and_target() {
    let mut regs = regs_with(&[(1, (-3_i32) as u32), (2, 4)]);
    let taken = executed(b().blt(1, 2, 32).build(), &mut regs);
    assert_eq!(taken.result1, 1);
    assert_eq!(taken.result2, PC + 32);
    assert!(taken.taken());

    let not_taken = executed(b().bltu(1, 2, 32).build(), &mut regs);
    assert_eq!(not_taken.result1, 0);
    assert!(!not_taken.taken());
}

#[test]
fn store_routes_address_and_data() {
    let mut regs = regs_with(&[(1, 0x8000_1000), (2, 0xDEAD_BEEF)]);
    let ex = executed(b().sw(1, 2, -4).build(), &mut regs);
    assert_eq!(ex.result1, 0x8000_0FFC);
    assert_eq!(ex.result2, 0xDEAD_BEEF);
    assert_eq!(ex.funct3, 0b010);
}

#[test]
fn csr_passes_source_operand_through() {
    let mut regs = regs_with(&[(4, 0x1234)]);
    let ex = executed(b().csrrw(1, 0x340, 4).build(), &mut regs);
    assert_eq!(ex.result1, 0x1234);
    assert!(ex.ctrl.csr);
}

#[test]
fn illegal_flag_is_carried() {
    let mut regs = Gpr::new();
    let ex = executed(0xFFFF_FFFF, &mut regs);
    assert!(ex.illegal);
    assert_eq!(ex.inst, 0xFFFF_FFFF);
}

// ─── Holding register ──────────────────────────────────────────────────────

#[test]
fn holds_until_retire_accepts() {
    let mut stage = ExecuteStage::new();
    let op = DecodedOpBuilder::new().pc(PC).operands(1, 2).build();

    assert!(stage.in_ready(false));
    stage.tick(Some(op), false, None);
    assert!(!stage.is_empty());
    assert!(!stage.in_ready(false));
    assert!(stage.in_ready(true));

    stage.tick(None, false, None);
    assert_eq!(stage.output().map(|ex| ex.result1), Some(3));

    stage.tick(None, true, None);
    assert!(stage.is_empty());
    assert!(stage.output().is_none());
}

#[test]
fn accept_and_hand_off_in_the_same_cycle() {
    let mut stage = ExecuteStage::new();
    stage.tick(Some(DecodedOpBuilder::new().pc(PC).build()), false, None);
    stage.tick(Some(DecodedOpBuilder::new().pc(PC + 4).build()), true, None);
    assert_eq!(stage.output().map(|ex| ex.pc), Some(PC + 4));
}

#[test]
fn held_micro_op_snoops_writes() {
    let mut stage = ExecuteStage::new();
    let op = DecodedOpBuilder::new().rs1(6, 0).rs2(7, 0).build();
    stage.tick(Some(op), false, None);
    stage.tick(None, false, Some(WriteBack { rd: 6, data: 10 }));
    stage.tick(None, false, Some(WriteBack { rd: 7, data: 32 }));
    assert_eq!(stage.output().map(|ex| ex.result1), Some(42));
}
