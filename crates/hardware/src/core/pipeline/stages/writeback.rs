//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! commits the MEM/WB result to the register file and retires the instruction.
//! Writeback runs before decode phase 2 in the same cycle, so a value written
//! here is visible to the instruction being decoded.

use crate::core::Cpu;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// The non-zero register written, if any.
pub fn wb_stage(cpu: &mut Cpu) -> Option<usize> {
    let wb = cpu.mem_wb?;
    cpu.stats.instructions_retired += 1;

    if !wb.ctrl.reg_write {
        tracing::trace!("WB  pc={:#010x} retire", wb.pc);
        return None;
    }

    let val = wb.result();
    cpu.memory.write_register(wb.rd, val);
    tracing::trace!("WB  pc={:#010x} r{} <- {:#x}", wb.pc, wb.rd, val);

    (wb.rd != 0).then_some(wb.rd)
}
