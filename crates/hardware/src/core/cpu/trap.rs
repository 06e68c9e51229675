//! Exception Handling Logic.
//!
//! This module implements the precise-exception model for the CPU. It performs
//! the following:
//! 1. **Raising:** Records at most one exception per cycle; the first one detected wins.
//! 2. **Context Saving:** Writes BADVADDR, CAUSE and EPC and pushes the KU/IE stack.
//! 3. **Squashing:** Clears every latch holding an instruction younger than the faulting one.
//! 4. **Redirection:** Sends the PC to the exception vector.

use super::Cpu;
use crate::common::error::{ExceptionStage, MipsException};

impl Cpu {
    /// Offers an exception for commit at the end of the cycle.
    ///
    /// The exception is dropped when interrupts are disabled (STATUS.IEc clear)
    /// or when an earlier stage of the cycle already raised one. The faulting
    /// instruction is nullified by its stage either way.
    ///
    /// # Arguments
    ///
    /// * `e` - The exception.
    /// * `stage` - The stage that detected it.
    pub fn raise(&mut self, e: MipsException, stage: ExceptionStage) {
        if !self.cop0.interrupts_enabled() {
            tracing::debug!("masked exception: {}", e);
            return;
        }
        if self.pending_exception.is_some() {
            tracing::debug!("dropped exception (slot taken): {}", e);
            return;
        }
        self.pending_exception = Some((e, stage));
    }

    /// Commits an exception: saves context, squashes younger work and redirects the PC.
    ///
    /// Called after the new latches are in place, so the squash applies to
    /// the instructions that advanced this cycle.
    ///
    /// # Arguments
    ///
    /// * `e` - The exception.
    /// * `stage` - The stage that detected it.
    pub fn commit_exception(&mut self, e: MipsException, stage: ExceptionStage) {
        self.cop0.record_exception(&e);
        self.cop0.push_mode_stack();

        self.if_id = None;
        if matches!(stage, ExceptionStage::Execute | ExceptionStage::Memory) {
            self.id_ex = None;
            self.ex_mem = None;
        }
        if stage == ExceptionStage::Memory {
            self.mem_wb = None;
        }

        self.pc = self.cop0.exception_address(&e);
        self.trace.exception = Some(e.code());
        self.trace.branch_taken = false;
        self.stats.exceptions_taken += 1;

        tracing::debug!(
            "exception {} in {:?}: epc={:#010x} cause={:#010x} -> {:#010x}",
            e.code(),
            stage,
            e.epc(),
            e.cause_register(),
            self.pc
        );
    }
}
