//! Precise Exception Tests.
//!
//! Each test provokes one exception cause and checks the coprocessor 0
//! context (EPC, CAUSE, BADVADDR, STATUS), which younger instructions were
//! squashed, and where the PC went.

use mipsim_core::common::constants::{DATA_SEGMENT_BASE, EXCEPTION_VECTOR, TEXT_SEGMENT_BASE};
use mipsim_core::common::error::ExceptionCode;
use mipsim_core::config::Config;
use mipsim_core::core::arch::cop0;
use mipsim_core::isa::abi::{REG_K0, REG_T0, REG_T1, REG_T2, REG_T3, REG_T4, REG_T5};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;

const BASE: u32 = TEXT_SEGMENT_BASE;

fn addi(rt: usize, rs: usize, imm: i32) -> u32 {
    InstructionBuilder::new().addi(rt, rs, imm).build()
}

/// Steps until the first exception is taken, returning the 1-based cycle.
fn cycle_of_first_exception(tc: &mut TestContext, max: u64) -> Option<u64> {
    (1..=max).find(|_| {
        tc.sim.step();
        tc.sim.exception_taken().is_some()
    })
}

// ══════════════════════════════════════════════════════════
// 1. Arithmetic overflow
// ══════════════════════════════════════════════════════════

/// Program:
///   0: t2 = 1           (older, completes)
///   4: t1 = t0 + t0     (overflows in EX)
///   8: t3 = 1           (younger, squashed)
fn overflow_program() -> TestContext {
    let mut tc = TestContext::new().load_program(&[
        addi(REG_T2, 0, 1),
        InstructionBuilder::new().add(REG_T1, REG_T0, REG_T0).build(),
        addi(REG_T3, 0, 1),
    ]);
    tc.set_reg(REG_T0, 0x7FFF_FFFF);
    tc
}

#[test]
fn immediate_overflow_on_forwarded_operand() {
    // t0 = 0x7FFF_FFFF built in the pipeline, then addi overflows on the bypassed value.
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().lui(REG_T0, 0x7FFF).build(),
        InstructionBuilder::new().ori(REG_T0, REG_T0, 0xFFFF).build(),
        addi(REG_T1, REG_T0, 1),
        addi(REG_T2, 0, 1),
    ]);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(5));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::Overflow));
    assert_eq!(tc.cpu().pc, EXCEPTION_VECTOR);
    assert_eq!(tc.cpu().cop0.epc(), BASE + 8);

    tc.run(4);
    assert_eq!(tc.get_reg(REG_T0), 0x7FFF_FFFF);
    assert_eq!(tc.get_reg(REG_T1), 0);
    assert_eq!(tc.get_reg(REG_T2), 0, "younger instruction squashed");
}

#[test]
fn overflow_is_taken_in_execute() {
    let mut tc = overflow_program();

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(4));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::Overflow));
    assert_eq!(tc.cpu().pc, EXCEPTION_VECTOR);
    assert_eq!(tc.cpu().cop0.epc(), BASE + 4);
    assert_eq!(tc.cpu().cop0.cause(), 12 << 2);
    assert!(!tc.sim.branch_occurred());
}

#[test]
fn overflow_squashes_younger_and_keeps_older() {
    let mut tc = overflow_program();
    tc.run(4);

    assert!(tc.cpu().if_id.is_none());
    assert!(tc.cpu().id_ex.is_none());
    assert!(tc.cpu().ex_mem.is_none());
    assert_eq!(tc.cpu().mem_wb.map(|e| e.pc), Some(BASE), "older instruction survives");

    tc.run(6);
    assert_eq!(tc.get_reg(REG_T2), 1);
    assert_eq!(tc.get_reg(REG_T1), 0, "faulting instruction never writes");
    assert_eq!(tc.get_reg(REG_T3), 0, "younger instruction squashed");
    assert_eq!(tc.sim.stats().exceptions_taken, 1);
}

#[test]
fn exception_entry_pushes_mode_stack() {
    let mut tc = overflow_program();
    tc.run(4);

    let status = tc.cpu().cop0.status();
    assert_eq!(status & 0x3F, 0b00_01_00);
    assert!(!tc.cpu().cop0.interrupts_enabled());
    assert!(!tc.cpu().cop0.in_user_mode());
}

#[test]
fn overflow_in_delay_slot_sets_bd_and_points_epc_at_jump() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().j(BASE + 12).build(),
        InstructionBuilder::new().add(REG_T1, REG_T0, REG_T0).build(),
    ]);
    tc.set_reg(REG_T0, 0x7FFF_FFFF);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(4));
    assert_eq!(tc.cpu().cop0.epc(), BASE);
    assert_eq!(tc.cpu().cop0.cause(), 0x8000_0000 | (12 << 2));
}

// ══════════════════════════════════════════════════════════
// 2. Priority
// ══════════════════════════════════════════════════════════

/// A load faults in Memory and the next instruction overflows in Execute in
/// the same cycle. Execute is checked first, so its exception is the one
/// taken even though the load is older.
#[test]
fn execute_fault_wins_over_memory_fault_in_same_cycle() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().lw(REG_T5, 0, REG_T4).build(),
        InstructionBuilder::new().add(REG_T1, REG_T0, REG_T0).build(),
    ]);
    tc.set_reg(REG_T0, 0x7FFF_FFFF);
    tc.set_reg(REG_T4, DATA_SEGMENT_BASE + 1);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(4));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::Overflow));
    assert_eq!(tc.cpu().cop0.epc(), BASE + 4);
    assert_eq!(tc.cpu().cop0.bad_vaddr(), 0, "memory fault was dropped");
    assert_eq!(tc.sim.stats().exceptions_taken, 1);
    assert!(tc.cpu().mem_wb.is_none(), "faulting load is nullified");
}

// ══════════════════════════════════════════════════════════
// 3. Address errors
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(InstructionBuilder::new().lw(REG_T5, 0, REG_T4).build(), 2, ExceptionCode::AddressErrorOnLoad)]
#[case(InstructionBuilder::new().lh(REG_T5, 0, REG_T4).build(), 1, ExceptionCode::AddressErrorOnLoad)]
#[case(InstructionBuilder::new().sw(REG_T5, 0, REG_T4).build(), 3, ExceptionCode::AddressErrorOnStore)]
fn misaligned_access_faults_in_memory(
    #[case] inst: u32,
    #[case] offset: u32,
    #[case] code: ExceptionCode,
) {
    let mut tc = TestContext::new().load_program(&[inst, addi(REG_T1, 0, 1)]);
    tc.set_reg(REG_T4, DATA_SEGMENT_BASE + offset);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(4));
    assert_eq!(tc.sim.exception_taken(), Some(code));
    assert_eq!(tc.cpu().cop0.epc(), BASE);
    assert_eq!(tc.cpu().cop0.bad_vaddr(), DATA_SEGMENT_BASE + offset);
    assert!(tc.cpu().is_drained(), "memory fault squashes every latch");

    tc.run(6);
    assert_eq!(tc.get_reg(REG_T1), 0);
}

#[test]
fn faulting_store_does_not_write_memory() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().sw(REG_T5, 0, REG_T4).build(),
    ]);
    tc.set_reg(REG_T4, DATA_SEGMENT_BASE + 2);
    tc.set_reg(REG_T5, 0xFFFF_FFFF);

    tc.run(5);
    assert_eq!(tc.cpu().memory.load_word(DATA_SEGMENT_BASE), 0);
}

#[test]
fn memory_fault_discards_younger_cop0_write() {
    // The mtc0 is in Execute while the load faults in Memory.
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().lw(REG_T5, 0, REG_T4).build(),
        InstructionBuilder::new().mtc0(REG_T0, cop0::CONTEXT).build(),
    ]);
    tc.set_reg(REG_T4, DATA_SEGMENT_BASE + 2);
    tc.set_reg(REG_T0, 0x1234_5678);

    tc.run(4);
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::AddressErrorOnLoad));
    assert_eq!(tc.cpu().cop0.read(cop0::CONTEXT), 0);
}

#[test]
fn user_mode_load_from_kernel_space_faults() {
    let mut tc = TestContext::new()
        .load_program(&[InstructionBuilder::new().lw(REG_T5, 0, REG_T4).build()])
        .in_user_mode();
    tc.set_reg(REG_T4, 0x8000_0000);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(4));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::AddressErrorOnLoad));
    assert_eq!(tc.cpu().cop0.bad_vaddr(), 0x8000_0000);
    assert!(!tc.cpu().cop0.in_user_mode(), "exception enters kernel mode");
    assert_eq!(tc.cpu().cop0.status() & 0xF, 0b11_00, "user state saved as previous");
}

#[test]
fn user_mode_fetch_from_kernel_space_faults() {
    let mut tc = TestContext::new()
        .load_program(&[InstructionBuilder::new().jr(REG_T3).build()])
        .in_user_mode();
    tc.set_reg(REG_T3, 0x8000_0000);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(3));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::AddressErrorOnLoad));
    assert_eq!(tc.cpu().cop0.epc(), 0x8000_0000);
    assert_eq!(tc.cpu().cop0.bad_vaddr(), 0x8000_0000);
    assert_eq!(tc.cpu().pc, EXCEPTION_VECTOR);
}

#[test]
fn kernel_mode_may_touch_kernel_space() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().sw(REG_T0, 0, REG_T4).build(),
        InstructionBuilder::new().lw(REG_T1, 0, REG_T4).build(),
    ]);
    tc.set_reg(REG_T4, 0x9000_0000);
    tc.set_reg(REG_T0, 42);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.sim.stats().exceptions_taken, 0);
    assert_eq!(tc.get_reg(REG_T1), 42);
}

// ══════════════════════════════════════════════════════════
// 4. Trapping instructions
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(InstructionBuilder::new().syscall().build(), ExceptionCode::Syscall)]
#[case(InstructionBuilder::new().brk().build(), ExceptionCode::Break)]
#[case(0xFC00_0000, ExceptionCode::IllegalInstruction)]
fn trap_in_execute(#[case] inst: u32, #[case] code: ExceptionCode) {
    let mut tc = TestContext::new().load_program(&[inst, addi(REG_T1, 0, 1)]);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(3));
    assert_eq!(tc.sim.exception_taken(), Some(code));
    assert_eq!(tc.cpu().cop0.epc(), BASE);
    assert_eq!(tc.cpu().cop0.cause(), code.code() << 2);

    tc.run(6);
    assert_eq!(tc.get_reg(REG_T1), 0);
}

#[test]
fn cop0_unusable_in_user_mode() {
    let mut tc = TestContext::new()
        .load_program(&[InstructionBuilder::new().mfc0(REG_T0, cop0::STATUS).build()])
        .in_user_mode();

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(3));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::CoprocessorUnusable));
    assert_eq!(tc.cpu().cop0.cause(), 11 << 2);
}

#[test]
fn cop0_usable_in_user_mode_with_cu0() {
    let mut tc = TestContext::new()
        .load_program(&[InstructionBuilder::new().mfc0(REG_T0, cop0::PRID).build()])
        .in_user_mode();
    let status = tc.cpu().cop0.status() | cop0::STATUS_CU0;
    tc.cpu_mut().cop0.write(cop0::STATUS, status);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.sim.stats().exceptions_taken, 0);
    assert_eq!(tc.get_reg(REG_T0), 0x0000_0230);
}

#[test]
fn other_coprocessors_are_always_unusable() {
    let mut tc = TestContext::new().load_program(&[InstructionBuilder::new().cop1().build()]);

    assert_eq!(cycle_of_first_exception(&mut tc, 10), Some(3));
    assert_eq!(tc.sim.exception_taken(), Some(ExceptionCode::CoprocessorUnusable));
    assert_eq!(tc.cpu().cop0.cause(), (1 << 28) | (11 << 2));
}

// ══════════════════════════════════════════════════════════
// 5. Masking and return from exception
// ══════════════════════════════════════════════════════════

#[test]
fn disabled_interrupts_drop_exception_but_nullify_instruction() {
    let mut config = Config::default();
    config.pipeline.initial_status = 0xFF10;
    let mut tc = TestContext::with_config(&config).load_program(&[
        InstructionBuilder::new().add(REG_T1, REG_T0, REG_T0).build(),
        addi(REG_T2, 0, 1),
    ]);
    tc.set_reg(REG_T0, 0x7FFF_FFFF);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.sim.stats().exceptions_taken, 0);
    assert_eq!(tc.cpu().cop0.epc(), 0);
    assert_eq!(tc.get_reg(REG_T1), 0, "overflowing add writes nothing");
    assert_eq!(tc.get_reg(REG_T2), 1, "execution continues");
}

#[test]
fn second_exception_masked_inside_handler() {
    // After the first exception IEc is clear, so the second add is nullified silently.
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().add(REG_T1, REG_T0, REG_T0).build(),
    ]);
    tc.set_reg(REG_T0, 0x7FFF_FFFF);
    tc = tc.with_code_at(
        EXCEPTION_VECTOR,
        &[InstructionBuilder::new().add(REG_T2, REG_T0, REG_T0).build()],
    );

    tc.run(12);
    assert_eq!(tc.sim.stats().exceptions_taken, 1);
    assert_eq!(tc.cpu().cop0.epc(), BASE);
}

#[test]
fn mtc0_then_mfc0_reads_new_value() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().mtc0(REG_T0, cop0::EPC).build(),
        InstructionBuilder::new().mfc0(REG_T1, cop0::EPC).build(),
    ]);
    tc.set_reg(REG_T0, 0x0040_0100);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.cpu().cop0.epc(), 0x0040_0100);
    assert_eq!(tc.get_reg(REG_T1), 0x0040_0100);
}

#[test]
fn rfe_pops_mode_stack() {
    let mut config = Config::default();
    config.pipeline.initial_status = 0xFF00 | 0b00_11_00;
    let mut tc =
        TestContext::with_config(&config).load_program(&[InstructionBuilder::new().rfe().build()]);

    let _cycles = tc.run_to_completion(20);
    assert_eq!(tc.cpu().cop0.status(), 0xFF03);
    assert!(tc.cpu().cop0.in_user_mode());
    assert!(tc.cpu().cop0.interrupts_enabled());
}

#[test]
fn syscall_handler_returns_with_rfe() {
    // Handler: k0 = EPC + 4; jr k0 with rfe in the delay slot.
    let handler = [
        InstructionBuilder::new().mfc0(REG_K0, cop0::EPC).build(),
        InstructionBuilder::new().addiu(REG_K0, REG_K0, 4).build(),
        InstructionBuilder::new().jr(REG_K0).build(),
        InstructionBuilder::new().rfe().build(),
    ];
    let mut tc = TestContext::new()
        .load_program(&[InstructionBuilder::new().syscall().build(), addi(REG_T0, 0, 7)])
        .with_code_at(EXCEPTION_VECTOR, &handler);

    assert_eq!(tc.run_to_completion(50), 12);
    assert_eq!(tc.get_reg(REG_K0), BASE + 4);
    assert_eq!(tc.get_reg(REG_T0), 7, "execution resumes after the syscall");
    assert!(tc.cpu().cop0.interrupts_enabled());
    assert_eq!(tc.sim.stats().exceptions_taken, 1);
}

#[test]
fn program_keeps_running_while_handler_executes() {
    let mut tc = TestContext::new()
        .load_program(&[InstructionBuilder::new().syscall().build()])
        .with_code_at(EXCEPTION_VECTOR, &[addi(REG_T1, 0, 3)]);

    let trail = tc.record(4, |sim| (sim.exception_taken().is_some(), sim.has_next_instruction()));
    assert_eq!(trail, [(false, true), (false, true), (true, true), (false, true)]);

    tc.run(4);
    assert_eq!(tc.get_reg(REG_T1), 3, "handler code ran");
}
