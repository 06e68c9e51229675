//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five pipeline stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Structures for carrying state between pipeline stages.
//! 2. **Validity:** Each latch is an `Option`; `None` is a bubble. An instruction
//!    encoded as all zeros can never be mistaken for an empty latch.
//! 3. **Exception Attribution:** Every entry carries its instruction address and
//!    delay-slot flag so a fault in any stage can set EPC precisely.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::signals::ControlSignals;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// The instruction was fetched in the delay slot of a branch or jump.
    pub in_delay_slot: bool,
}

impl IfIdEntry {
    /// Returns the address of the next sequential instruction.
    pub const fn pc_plus4(&self) -> u32 {
        self.pc.wrapping_add(INSTRUCTION_SIZE)
    }
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Holds the operand values read (or forwarded) in Decode.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Value of the rs register.
    pub rs_val: u32,
    /// Value of the rt register.
    pub rt_val: u32,
    /// Sign-extended 16-bit immediate.
    pub imm: i32,
    /// The instruction occupies a branch delay slot.
    pub in_delay_slot: bool,
}

impl IdExEntry {
    /// Returns the address of the next sequential instruction.
    pub const fn pc_plus4(&self) -> u32 {
        self.pc.wrapping_add(INSTRUCTION_SIZE)
    }
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result, or the effective address for loads and stores.
    pub alu: u32,
    /// Data to be stored (for store instructions).
    pub store_data: u32,
    /// Control signals for the Memory and Writeback stages.
    pub ctrl: ControlSignals,
}

impl ExMemEntry {
    /// Returns `true` if this instruction will write the non-zero register `reg`.
    pub const fn writes(&self, reg: usize) -> bool {
        self.ctrl.reg_write && self.rd != 0 && self.rd == reg
    }
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (for non-load instructions) or effective address.
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals for the Writeback stage.
    pub ctrl: ControlSignals,
}

impl MemWbEntry {
    /// Returns `true` if this instruction will write the non-zero register `reg`.
    pub const fn writes(&self, reg: usize) -> bool {
        self.ctrl.reg_write && self.rd != 0 && self.rd == reg
    }

    /// Returns the value written back: loaded data when mem-to-reg, else the ALU result.
    pub const fn result(&self) -> u32 {
        if self.ctrl.mem_read {
            self.load_data
        } else {
            self.alu
        }
    }
}

/// The IF/ID latch; `None` is a bubble.
pub type IfId = Option<IfIdEntry>;

/// The ID/EX latch; `None` is a bubble.
pub type IdEx = Option<IdExEntry>;

/// The EX/MEM latch; `None` is a bubble.
pub type ExMem = Option<ExMemEntry>;

/// The MEM/WB latch; `None` is a bubble.
pub type MemWb = Option<MemWbEntry>;
