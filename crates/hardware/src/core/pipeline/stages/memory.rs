//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! It performs loads and stores for the EX/MEM instruction, checking the
//! effective address against alignment and the current privilege mode first.
//! A faulting access never touches memory and produces no MEM/WB entry.

use crate::common::data::AccessType;
use crate::common::error::MipsException;
use crate::core::Cpu;
use crate::core::pipeline::latches::{MemWb, MemWbEntry};

/// Result of the memory stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryOutput {
    /// Entry for the MEM/WB latch.
    pub entry: MemWb,
    /// Kind and effective address of the attempted access.
    pub access: Option<(AccessType, u32)>,
    /// Address error raised by the access.
    pub fault: Option<MipsException>,
}

/// Executes the memory stage of the pipeline.
///
/// Stores are written immediately: the instruction in Memory is older than
/// anything that can fault in Execute or Fetch this cycle.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// The MEM/WB entry, the access performed and any address error.
pub fn mem_stage(cpu: &mut Cpu) -> MemoryOutput {
    let Some(ex) = cpu.ex_mem else {
        return MemoryOutput::default();
    };

    let kind = if ex.ctrl.mem_write {
        AccessType::Write
    } else if ex.ctrl.mem_read {
        AccessType::Read
    } else {
        return MemoryOutput {
            entry: Some(MemWbEntry {
                pc: ex.pc,
                inst: ex.inst,
                rd: ex.rd,
                alu: ex.alu,
                load_data: 0,
                ctrl: ex.ctrl,
            }),
            access: None,
            fault: None,
        };
    };

    let addr = ex.alu;
    let access = Some((kind, addr));

    if let Err(code) = cpu.check_access(kind, addr, ex.ctrl.width) {
        tracing::debug!("MEM pc={:#010x} {} {:#010x} fault: {}", ex.pc, kind, addr, code);
        return MemoryOutput {
            entry: None,
            access,
            fault: Some(
                MipsException::new(code, ex.pc, ex.ctrl.in_delay_slot).with_bad_vaddr(addr),
            ),
        };
    }

    let load_data = if kind == AccessType::Write {
        cpu.store(addr, ex.ctrl.width, ex.store_data);
        tracing::trace!("MEM pc={:#010x} store {:#010x} <- {:#x}", ex.pc, addr, ex.store_data);
        0
    } else {
        let data = cpu.load(addr, ex.ctrl.width, ex.ctrl.signed_load);
        tracing::trace!("MEM pc={:#010x} load {:#010x} -> {:#x}", ex.pc, addr, data);
        data
    };

    MemoryOutput {
        entry: Some(MemWbEntry {
            pc: ex.pc,
            inst: ex.inst,
            rd: ex.rd,
            alu: ex.alu,
            load_data,
            ctrl: ex.ctrl,
        }),
        access,
        fault: None,
    }
}
