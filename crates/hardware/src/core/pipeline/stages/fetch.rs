//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads
//! the word at the PC, checks the fetch address against alignment and the
//! current privilege mode, and tags the instruction when it occupies the delay
//! slot of a branch or jump currently in Decode.

use crate::common::data::AccessType;
use crate::common::error::MipsException;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IfId, IfIdEntry};
use crate::core::pipeline::signals::MemWidth;

/// Result of the fetch stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOutput {
    /// Entry for the IF/ID latch; `None` for a fetched `nop` or a faulting fetch.
    pub entry: IfId,
    /// Address error raised by the fetch.
    pub fault: Option<MipsException>,
}

/// Executes the fetch stage of the pipeline.
///
/// The fetch is speculative: the caller discards it when Decode stalls.
///
/// # Arguments
///
/// * `cpu` - The CPU state (PC, memory, privilege mode)
/// * `in_delay_slot` - Decode holds a branch or jump, so this instruction is its delay slot
///
/// # Returns
///
/// The IF/ID entry and any fetch fault.
pub fn fetch_stage(cpu: &Cpu, in_delay_slot: bool) -> FetchOutput {
    let pc = cpu.pc;

    if let Err(code) = cpu.check_access(AccessType::Fetch, pc, MemWidth::Word) {
        tracing::debug!("IF  pc={:#010x} fault: {}", pc, code);
        return FetchOutput {
            entry: None,
            fault: Some(MipsException::new(code, pc, in_delay_slot).with_bad_vaddr(pc)),
        };
    }

    let inst = cpu.memory.load_word(pc);
    tracing::trace!("IF  pc={:#010x} inst={:#010x}", pc, inst);

    let entry = (inst != 0).then_some(IfIdEntry {
        pc,
        inst,
        in_delay_slot,
    });

    FetchOutput { entry, fault: None }
}
