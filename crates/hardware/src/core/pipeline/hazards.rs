//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Load-use and branch-use hazards that require a stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing
//!    the register file with this cycle's Execute and Memory results.
//! 3. **Branch Comparator Forwarding:** The separate, Memory-only bypass feeding
//!    `beq`/`bne` resolution in Decode.
//!
//! All functions take the *current cycle's* stage outputs: the Execute result is
//! the entry about to be latched into EX/MEM, the Memory result the entry about
//! to be latched into MEM/WB.

use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};

/// Where a Decode operand value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// The committed register file (after this cycle's write-back).
    RegisterFile,
    /// This cycle's Execute result.
    Execute,
    /// This cycle's Memory result (loaded data or ALU result).
    Memory,
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in Decode needs a register that
/// the load currently in Execute has not yet read from memory.
///
/// # Arguments
///
/// * `ex` - This cycle's Execute result.
/// * `rs` - The rs register read by the Decode instruction, if any.
/// * `rt` - The rt register read by the Decode instruction, if any.
///
/// # Examples
///
/// ```text
/// EX: lw  $t0, 0($zero)     <- loads into $t0
/// ID: add $t1, $t0, $t0     <- uses $t0, must wait one cycle
/// ```
pub fn need_stall_load_use(ex: Option<&ExMemEntry>, rs: Option<usize>, rt: Option<usize>) -> bool {
    ex.is_some_and(|e| {
        e.ctrl.mem_read && (rs.is_some_and(|r| e.writes(r)) || rt.is_some_and(|r| e.writes(r)))
    })
}

/// Checks if a branch in Decode must stall for its comparison operands.
///
/// The comparator only bypasses from Memory, so a branch waits while the
/// Execute instruction writes one of its operands, or while a load in Memory
/// does (its data arrives too late in the cycle).
///
/// # Arguments
///
/// * `ex` - This cycle's Execute result.
/// * `mem` - This cycle's Memory result.
/// * `rs` - The branch's rs register.
/// * `rt` - The branch's rt register.
pub fn need_stall_branch(
    ex: Option<&ExMemEntry>,
    mem: Option<&MemWbEntry>,
    rs: usize,
    rt: usize,
) -> bool {
    let ex_hit = ex.is_some_and(|e| e.writes(rs) || e.writes(rt));
    let mem_hit = mem.is_some_and(|m| m.ctrl.mem_read && (m.writes(rs) || m.writes(rt)));
    ex_hit || mem_hit
}

/// Forwards a Decode operand from a later pipeline stage.
///
/// Priority is Execute, then Memory, then the register file. A load in
/// Execute is never a source; the load-use stall covers it.
///
/// # Arguments
///
/// * `reg` - The register index being read.
/// * `reg_val` - The value read from the register file.
/// * `ex` - This cycle's Execute result.
/// * `mem` - This cycle's Memory result.
///
/// # Returns
///
/// The operand value and where it came from.
pub fn forward_operand(
    reg: usize,
    reg_val: u32,
    ex: Option<&ExMemEntry>,
    mem: Option<&MemWbEntry>,
) -> (u32, ForwardSource) {
    if let Some(e) = ex.filter(|e| e.writes(reg) && !e.ctrl.mem_read) {
        return (e.alu, ForwardSource::Execute);
    }
    if let Some(m) = mem.filter(|m| m.writes(reg)) {
        return (m.result(), ForwardSource::Memory);
    }
    (reg_val, ForwardSource::RegisterFile)
}

/// Forwards a branch comparator input from the Memory stage.
///
/// # Arguments
///
/// * `reg` - The register index being compared.
/// * `val` - The value the operand path produced.
/// * `mem` - This cycle's Memory result.
///
/// # Returns
///
/// The comparator input and whether the Memory bypass supplied it.
pub fn forward_branch_operand(reg: usize, val: u32, mem: Option<&MemWbEntry>) -> (u32, bool) {
    match mem.filter(|m| m.writes(reg)) {
        Some(m) => (m.result(), true),
        None => (val, false),
    }
}
