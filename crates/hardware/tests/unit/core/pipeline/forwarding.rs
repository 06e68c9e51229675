//! Data Forwarding Tests.
//!
//! Verifies which bypass paths the trace reports when dependent instructions
//! follow each other at distance one, two and three.

use mipsim_core::common::constants::DATA_SEGMENT_BASE;
use mipsim_core::core::pipeline::trace::ForwardPath;
use mipsim_core::isa::abi::{REG_T0, REG_T1, REG_T2};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

fn addi(rt: usize, rs: usize, imm: i32) -> u32 {
    InstructionBuilder::new().addi(rt, rs, imm).build()
}

fn add(rd: usize, rs: usize, rt: usize) -> u32 {
    InstructionBuilder::new().add(rd, rs, rt).build()
}

fn nop() -> u32 {
    InstructionBuilder::new().nop().build()
}

#[test]
fn distance_one_forwards_from_execute() {
    let mut tc = TestContext::new().load_program(&[addi(REG_T0, 0, 5), add(REG_T1, REG_T0, REG_T0)]);

    tc.run(3);
    assert_eq!(
        tc.sim.trace().forwarding.as_array(),
        [true, false, true, false, false, false]
    );

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.get_reg(REG_T1), 10);
    assert_eq!(tc.sim.stats().forwards, 2);
}

#[test]
fn distance_two_forwards_from_memory() {
    let mut tc =
        TestContext::new().load_program(&[addi(REG_T0, 0, 5), nop(), add(REG_T1, REG_T0, REG_T0)]);

    tc.run(4);
    assert!(tc.sim.forwarding_occurred(ForwardPath::MemToRs));
    assert!(tc.sim.forwarding_occurred(ForwardPath::MemToRt));
    assert!(!tc.sim.forwarding_occurred(ForwardPath::ExToRs));

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.get_reg(REG_T1), 10);
}

#[test]
fn distance_three_reads_written_back_register() {
    let mut tc = TestContext::new().load_program(&[
        addi(REG_T0, 0, 5),
        nop(),
        nop(),
        add(REG_T1, REG_T0, REG_T0),
    ]);

    let any = tc.record(10, |sim| sim.trace().forwarding.count() > 0);
    assert!(any.iter().all(|&f| !f));
    assert_eq!(tc.get_reg(REG_T1), 10);
    assert_eq!(tc.sim.stats().forwards, 0);
}

#[test]
fn execute_result_beats_older_memory_result() {
    let mut tc = TestContext::new().load_program(&[
        addi(REG_T0, 0, 1),
        addi(REG_T0, 0, 2),
        add(REG_T1, REG_T0, REG_T0),
    ]);

    tc.run(4);
    assert!(tc.sim.forwarding_occurred(ForwardPath::ExToRs));
    assert!(!tc.sim.forwarding_occurred(ForwardPath::MemToRs));

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.get_reg(REG_T1), 4);
}

#[test]
fn unread_field_is_not_forwarded() {
    // addi names t1 in its rt field as a destination, not a source.
    let mut tc = TestContext::new().load_program(&[addi(REG_T1, 0, 5), addi(REG_T1, REG_T0, 1)]);

    tc.run(3);
    assert_eq!(tc.sim.trace().forwarding.count(), 0);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.get_reg(REG_T1), 1);
}

#[test]
fn load_destination_in_unread_field_does_not_stall() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().lw(REG_T0, 0, REG_T2).build(),
        addi(REG_T0, REG_T1, 1),
    ]);
    tc.set_reg(REG_T2, DATA_SEGMENT_BASE);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.sim.stats().stalls_load_use, 0);
}

#[test]
fn store_data_is_forwarded() {
    let mut tc = TestContext::new().load_program(&[
        addi(REG_T0, 0, 9),
        InstructionBuilder::new().sw(REG_T0, 0, REG_T2).build(),
    ]);
    tc.set_reg(REG_T2, DATA_SEGMENT_BASE);

    tc.run(3);
    assert!(tc.sim.forwarding_occurred(ForwardPath::ExToRt));
    assert!(!tc.sim.forwarding_occurred(ForwardPath::ExToRs));

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.cpu().memory.load_word(DATA_SEGMENT_BASE), 9);
}
