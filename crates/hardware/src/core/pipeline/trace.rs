//! Per-cycle pipeline trace.
//!
//! The trace is reset at the start of every cycle and filled in by the stages
//! as they run. It is the read-only view a pipeline visualiser consumes:
//! which stages held an instruction, which bypass paths fired, whether the
//! cycle stalled, branched or took an exception, and a short summary of the
//! Execute, Memory and Writeback stages.

use crate::common::data::AccessType;
use crate::common::error::ExceptionCode;

/// The five pipeline stages, in flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    Fetch = 0,
    /// Decode, register read, branch resolution.
    Decode = 1,
    /// ALU, multiply/divide issue, coprocessor moves.
    Execute = 2,
    /// Data memory access.
    Memory = 3,
    /// Register write-back.
    Writeback = 4,
}

impl Stage {
    /// All stages in flow order.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Returns the short stage name used in pipeline diagrams.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "IF",
            Self::Decode => "ID",
            Self::Execute => "EX",
            Self::Memory => "MEM",
            Self::Writeback => "WB",
        }
    }
}

/// Forwarding (bypass) paths into the Decode stage.
///
/// The discriminants are the indices reported by pipeline visualisers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForwardPath {
    /// Execute result to the rs operand.
    ExToRs = 0,
    /// Memory result to the rs operand.
    MemToRs = 1,
    /// Execute result to the rt operand.
    ExToRt = 2,
    /// Memory result to the rt operand.
    MemToRt = 3,
    /// Memory result to the rs input of the branch comparator.
    MemToBranchRs = 4,
    /// Memory result to the rt input of the branch comparator.
    MemToBranchRt = 5,
}

impl ForwardPath {
    /// All forwarding paths in index order.
    pub const ALL: [Self; 6] = [
        Self::ExToRs,
        Self::MemToRs,
        Self::ExToRt,
        Self::MemToRt,
        Self::MemToBranchRs,
        Self::MemToBranchRt,
    ];
}

/// Set of forwarding paths used by one Decode instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardFlags([bool; 6]);

impl ForwardFlags {
    /// Marks `path` as used.
    pub fn set(&mut self, path: ForwardPath) {
        self.0[path as usize] = true;
    }

    /// Returns whether `path` was used.
    pub const fn get(&self, path: ForwardPath) -> bool {
        self.0[path as usize]
    }

    /// Returns the flags indexed by [`ForwardPath`] discriminant.
    pub const fn as_array(&self) -> [bool; 6] {
        self.0
    }

    /// Returns the number of paths used.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&f| f).count()
    }
}

/// Observable events of one clock cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleTrace {
    stages: [bool; 5],
    /// Forwarding paths consumed by the instruction that left Decode.
    pub forwarding: ForwardFlags,
    /// A branch or jump redirected the PC this cycle.
    pub branch_taken: bool,
    /// A load-use or branch-use hazard stalled Fetch and Decode.
    pub stall: bool,
    /// An `mfhi`/`mflo` waited in Execute for the multiply/divide unit.
    pub multiplier_stall: bool,
    /// Cause of the exception committed at the end of the cycle.
    pub exception: Option<ExceptionCode>,
    /// Operator performed by the Execute stage.
    pub alu_symbol: Option<&'static str>,
    /// Kind and effective address of the Memory stage access.
    pub memory_access: Option<(AccessType, u32)>,
    /// Register written by the Writeback stage.
    pub written_register: Option<usize>,
}

impl CycleTrace {
    /// Records that `stage` held an instruction this cycle.
    pub fn mark_stage(&mut self, stage: Stage) {
        self.stages[stage as usize] = true;
    }

    /// Returns whether `stage` held an instruction this cycle.
    pub const fn stage(&self, stage: Stage) -> bool {
        self.stages[stage as usize]
    }

    /// Returns the stage flags indexed by [`Stage`] discriminant.
    pub const fn stages(&self) -> [bool; 5] {
        self.stages
    }
}
