//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. Decode
//! runs in two phases within one cycle:
//! 1. **Phase 1:** Split the IF/ID instruction into its fields and classify it,
//!    before the later stages run. This is what Fetch needs to tag a delay slot.
//! 2. **Phase 2:** After Execute, Memory and Writeback have produced this cycle's
//!    results, read the operands through the forwarding network and resolve
//!    branch and jump targets.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{ForwardSource, forward_branch_operand, forward_operand};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::trace::{ForwardFlags, ForwardPath};
use crate::isa::instruction::InstructionBits;
use crate::isa::{Op, decode};

/// An instruction split into its fields by decode phase 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInst {
    /// The IF/ID entry being decoded.
    pub entry: IfIdEntry,
    /// The decoded operation; `None` for a reserved encoding.
    pub op: Option<Op>,
    /// The rs field.
    pub rs: usize,
    /// The rt field.
    pub rt: usize,
}

impl DecodedInst {
    /// Returns the rs register if the operation reads it.
    pub fn source_rs(&self) -> Option<usize> {
        self.op.filter(|op| op.reads_rs()).map(|_| self.rs)
    }

    /// Returns the rt register if the operation reads it.
    pub fn source_rt(&self) -> Option<usize> {
        self.op.filter(|op| op.reads_rt()).map(|_| self.rt)
    }

    /// Returns `true` for a `beq`/`bne` that is evaluated as a branch.
    ///
    /// A branch sitting in another branch's delay slot is not evaluated.
    pub fn is_branch(&self) -> bool {
        !self.entry.in_delay_slot && self.op.is_some_and(Op::is_branch)
    }

    /// Returns `true` if this instruction makes the next fetch a delay slot.
    pub fn redirects(&self) -> bool {
        !self.entry.in_delay_slot && self.op.is_some_and(|op| op.is_branch() || op.is_jump())
    }
}

/// Result of decode phase 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Entry for the ID/EX latch.
    pub entry: IdExEntry,
    /// Forwarding paths that supplied an operand.
    pub forwards: ForwardFlags,
    /// Target of a branch or jump, whether or not it differs from PC+4.
    pub target: Option<u32>,
}

/// Executes decode phase 1.
///
/// # Arguments
///
/// * `cpu` - The CPU state; only the IF/ID latch is read
///
/// # Returns
///
/// The decoded instruction, or `None` when IF/ID holds a bubble.
pub fn decode_stage(cpu: &Cpu) -> Option<DecodedInst> {
    let entry = cpu.if_id?;
    let inst = entry.inst;
    let op = decode(inst);

    tracing::trace!(
        "ID  pc={:#010x} inst={:#010x} op={:?} delay_slot={}",
        entry.pc,
        inst,
        op,
        entry.in_delay_slot
    );

    Some(DecodedInst {
        entry,
        op,
        rs: inst.rs(),
        rt: inst.rt(),
    })
}

/// Executes decode phase 2: operand read, forwarding and branch resolution.
///
/// Must run after this cycle's Writeback so the register file already holds
/// the value written this cycle.
///
/// # Arguments
///
/// * `cpu` - The CPU state; the register file is read
/// * `d` - The phase-1 decode of the IF/ID instruction
/// * `ex` - This cycle's Execute result
/// * `mem` - This cycle's Memory result
///
/// # Returns
///
/// The ID/EX entry, the forwarding paths used and any branch or jump target.
pub fn read_operands(
    cpu: &Cpu,
    d: &DecodedInst,
    ex: Option<&ExMemEntry>,
    mem: Option<&MemWbEntry>,
) -> DecodeOutput {
    let mut forwards = ForwardFlags::default();
    let rs_reg = cpu.memory.read_register(d.rs);
    let rt_reg = cpu.memory.read_register(d.rt);
    let is_branch = d.is_branch();

    // Branches also drive the ALU operand muxes, so a Memory bypass into the
    // comparator reports both the operand path and the branch path.
    let rs_val = d.source_rs().map_or(rs_reg, |rs| {
        operand(rs, rs_reg, ex, mem, &mut forwards, ForwardPath::ExToRs, ForwardPath::MemToRs)
    });
    let rt_val = d.source_rt().map_or(rt_reg, |rt| {
        operand(rt, rt_reg, ex, mem, &mut forwards, ForwardPath::ExToRt, ForwardPath::MemToRt)
    });

    let inst = d.entry.inst;
    let entry = IdExEntry {
        pc: d.entry.pc,
        inst,
        rs_val,
        rt_val,
        imm: inst.simm(),
        in_delay_slot: d.entry.in_delay_slot,
    };

    let target = if is_branch {
        branch_target(d, rs_reg, rt_reg, mem, &mut forwards)
    } else if d.redirects() {
        jump_target(d, rs_val)
    } else {
        None
    };

    DecodeOutput {
        entry,
        forwards,
        target,
    }
}

/// Reads one operand through the Execute/Memory bypass.
fn operand(
    reg: usize,
    reg_val: u32,
    ex: Option<&ExMemEntry>,
    mem: Option<&MemWbEntry>,
    forwards: &mut ForwardFlags,
    ex_path: ForwardPath,
    mem_path: ForwardPath,
) -> u32 {
    let (val, source) = forward_operand(reg, reg_val, ex, mem);
    match source {
        ForwardSource::Execute => forwards.set(ex_path),
        ForwardSource::Memory => forwards.set(mem_path),
        ForwardSource::RegisterFile => {}
    }
    val
}

/// Resolves `beq`/`bne`, comparing through the Memory-only bypass.
///
/// Returns the taken target, or `None` when the branch falls through.
fn branch_target(
    d: &DecodedInst,
    rs_reg: u32,
    rt_reg: u32,
    mem: Option<&MemWbEntry>,
    forwards: &mut ForwardFlags,
) -> Option<u32> {
    let (a, a_fwd) = forward_branch_operand(d.rs, rs_reg, mem);
    let (b, b_fwd) = forward_branch_operand(d.rt, rt_reg, mem);
    if a_fwd {
        forwards.set(ForwardPath::MemToBranchRs);
    }
    if b_fwd {
        forwards.set(ForwardPath::MemToBranchRt);
    }

    let taken = match d.op {
        Some(Op::Beq) => a == b,
        Some(Op::Bne) => a != b,
        _ => false,
    };
    let offset = d.entry.inst.simm().wrapping_shl(2) as u32;
    let target = d.entry.pc_plus4().wrapping_add(offset);

    tracing::trace!(
        "ID  pc={:#010x} branch {:#x} vs {:#x} taken={} target={:#010x}",
        d.entry.pc,
        a,
        b,
        taken,
        target
    );

    taken.then_some(target)
}

/// Resolves `j`/`jal` (region-relative) and `jr`/`jalr` (register) targets.
fn jump_target(d: &DecodedInst, rs_val: u32) -> Option<u32> {
    match d.op {
        Some(Op::J | Op::Jal) => {
            let region = d.entry.pc_plus4() & 0xF000_0000;
            Some(region | (d.entry.inst.target() * INSTRUCTION_SIZE))
        }
        Some(Op::Jr | Op::Jalr) => Some(rs_val),
        _ => None,
    }
}
