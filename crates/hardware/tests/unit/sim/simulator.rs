//! # Simulator Accessor Tests
//!
//! Each accessor describes the cycle just completed. These tests step a small
//! program and check what a pipeline view would display after each step.

use mipsim_core::common::constants::DATA_SEGMENT_BASE;
use mipsim_core::common::data::AccessType;
use mipsim_core::core::pipeline::trace::Stage;
use mipsim_core::isa::abi::{REG_SP, REG_T0, REG_T1, REG_T2};
use mipsim_core::isa::mips1::opcodes::{OP_ANDI, OP_XORI};
use mipsim_core::{Config, Memory, Simulator};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

/// Program:
///   0: t1 = t0 - t0
///   4: t2 = mem[sp + 4]
///   8: mem[sp + 8] = t0
fn program() -> TestContext {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().sub(REG_T1, REG_T0, REG_T0).build(),
        InstructionBuilder::new().lw(REG_T2, 4, REG_SP).build(),
        InstructionBuilder::new().sw(REG_T0, 8, REG_SP).build(),
    ]);
    tc.set_reg(REG_SP, DATA_SEGMENT_BASE);
    tc.set_reg(REG_T0, 3);
    tc.cpu_mut().memory.store_word(DATA_SEGMENT_BASE + 4, 77);
    tc
}

#[test]
fn nothing_reported_before_first_step() {
    let tc = program();
    assert_eq!(tc.sim.fetched_mnemonic(), "nop");
    assert_eq!(tc.sim.fetched_disassembly(), "nop");
    assert_eq!(tc.sim.decode_labels(), None);
    assert_eq!(tc.sim.alu_symbol(), None);
    assert_eq!(tc.sim.memory_operation(), None);
    assert_eq!(tc.sim.writeback_register(), None);
    assert_eq!(tc.sim.exception_taken(), None);
    assert!(tc.sim.has_next_instruction());
}

#[test]
fn fetch_view() {
    let mut tc = program();
    tc.run(1);
    assert_eq!(tc.sim.fetched_mnemonic(), "sub");
    assert_eq!(tc.sim.fetched_disassembly(), "sub $t1, $t0, $t0");
    assert!(tc.sim.stage_occurred(Stage::Fetch));
    assert!(!tc.sim.stage_occurred(Stage::Decode));
}

#[test]
fn decode_labels_for_r_and_i_types() {
    let mut tc = program();
    tc.run(2);
    assert_eq!(
        tc.sim.decode_labels(),
        Some(["Rs: $t0".to_string(), "Rt: $t0".to_string()])
    );

    tc.run(1);
    assert_eq!(
        tc.sim.decode_labels(),
        Some(["Rs: $sp".to_string(), "Imm: 4".to_string()])
    );
}

#[test]
fn execute_view() {
    let mut tc = program();
    tc.run(3);
    assert_eq!(tc.sim.alu_symbol(), Some("-"));
    assert!(tc.sim.stage_occurred(Stage::Execute));

    tc.run(1);
    assert_eq!(tc.sim.alu_symbol(), Some("+"), "address generation");
}

#[rstest]
#[case(InstructionBuilder::new().and(REG_T1, REG_T0, REG_T0).build(), "&")]
#[case(InstructionBuilder::new().addi(REG_T1, REG_T0, 1).build(), "+")]
#[case(InstructionBuilder::new().sll(REG_T1, REG_T0, 2).build(), "<<")]
#[case(InstructionBuilder::new().lui(REG_T1, 1).build(), "lui")]
#[case(InstructionBuilder::new().ori(REG_T1, REG_T0, 1).build(), "ori")]
#[case(InstructionBuilder::new().opcode(OP_ANDI).rt(REG_T1).rs(REG_T0).imm(1).build(), "andi")]
#[case(InstructionBuilder::new().opcode(OP_XORI).rt(REG_T1).rs(REG_T0).imm(1).build(), "xori")]
fn alu_symbol_per_instruction(#[case] inst: u32, #[case] symbol: &str) {
    let mut tc = TestContext::new().load_program(&[inst]);
    tc.run(3);
    assert_eq!(tc.sim.alu_symbol(), Some(symbol));
}

#[test]
fn memory_view() {
    let mut tc = program();
    tc.run(4);
    assert_eq!(tc.sim.memory_operation(), None, "sub does not access memory");

    tc.run(1);
    assert_eq!(tc.sim.memory_operation(), Some(AccessType::Read));
    assert_eq!(tc.sim.memory_address().as_deref(), Some("0x10010004"));

    tc.run(1);
    assert_eq!(tc.sim.memory_operation(), Some(AccessType::Write));
    assert_eq!(tc.sim.memory_address().as_deref(), Some("0x10010008"));
}

#[test]
fn writeback_view() {
    let mut tc = program();
    tc.run(5);
    assert_eq!(tc.sim.writeback_register(), Some("$t1"));
    tc.run(1);
    assert_eq!(tc.sim.writeback_register(), Some("$t2"));
    assert_eq!(tc.get_reg(REG_T2), 77);
    tc.run(1);
    assert_eq!(tc.sim.writeback_register(), None, "stores write no register");
    assert!(tc.sim.stage_occurred(Stage::Writeback));
}

#[test]
fn stats_accumulate() {
    let mut tc = program();
    let cycles = tc.run_to_completion(50);
    let stats = tc.sim.stats();

    assert_eq!(stats.cycles, cycles);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(tc.cpu().memory.load_word(DATA_SEGMENT_BASE + 8), 3);
}

#[test]
fn clones_run_independently() {
    let mut tc = program();
    tc.run(2);
    let mut fork = tc.sim.clone();

    fork.step();
    fork.step();
    assert_eq!(fork.stats().cycles, 4);
    assert_eq!(tc.sim.stats().cycles, 2);
}

#[test]
fn build_from_memory_directly() {
    let mut memory = Memory::new();
    memory
        .load_program(
            0x0040_0000,
            &[InstructionBuilder::new().addi(REG_T0, 0, 5).build()],
        )
        .unwrap();

    let mut sim = Simulator::new(memory, &Config::default());
    while sim.has_next_instruction() {
        sim.step();
    }
    assert_eq!(sim.cpu().memory.read_register(REG_T0), 5);
    assert_eq!(sim.stats().cycles, 5);
}

#[test]
fn pipeline_diagram_logging_does_not_disturb_timing() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut tc = TestContext::with_config(&config).load_program(&[
        InstructionBuilder::new().lw(REG_T0, 0, REG_SP).build(),
        InstructionBuilder::new().add(REG_T1, REG_T0, REG_T0).build(),
    ]);
    tc.set_reg(REG_SP, DATA_SEGMENT_BASE);

    assert_eq!(tc.run_to_completion(20), 7);
}
