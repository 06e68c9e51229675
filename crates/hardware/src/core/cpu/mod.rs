//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Holds the PC, memory and register file, and coprocessor 0.
//! 2. **Pipeline Control:** Owns the four inter-stage latches and the per-cycle trace.
//! 3. **Execution Units:** Owns the multi-cycle multiply/divide unit.
//! 4. **Exceptions:** Holds the single pending-exception slot serviced at end of cycle.

/// Per-cycle pipeline orchestration and commit.
pub mod execution;

/// Access checks and width-aware loads and stores.
pub mod memory;

/// Exception raising and commit.
pub mod trap;

use crate::common::error::{ExceptionStage, MipsException};
use crate::config::Config;
use crate::core::arch::cop0::Cop0;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::trace::CycleTrace;
use crate::core::units::mdu::MultiplyUnit;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// The CPU advances one clock per [`Cpu::tick`]: every stage computes its
/// result from the latches as they stood at the start of the cycle, then the
/// new latches, PC and architectural state are committed together.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program Counter (address of the next fetch).
    pub pc: u32,
    /// Memory and general-purpose registers.
    pub memory: Memory,
    /// System control coprocessor.
    pub cop0: Cop0,
    /// Multiply/divide unit with HI and LO.
    pub mdu: MultiplyUnit,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,

    /// Exception awaiting commit this cycle, with the stage that detected it.
    pub pending_exception: Option<(MipsException, ExceptionStage)>,
    /// What happened during the last cycle.
    pub trace: CycleTrace,
    /// Performance statistics.
    pub stats: SimStats,
    /// Enable the per-cycle pipeline diagram.
    pub trace_instructions: bool,

    has_next: bool,
}

impl Cpu {
    /// Creates a new CPU instance with the specified memory and configuration.
    ///
    /// # Arguments
    ///
    /// * `memory` - Memory holding the program, with the last instruction address set.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with empty latches and the PC at `config.general.start_pc`.
    pub fn new(memory: Memory, config: &Config) -> Self {
        Self {
            pc: config.general.start_pc,
            memory,
            cop0: Cop0::new(
                config.pipeline.initial_status,
                config.pipeline.exception_vector,
            ),
            mdu: MultiplyUnit::new(
                config.pipeline.multiply_latency,
                config.pipeline.divide_latency,
            ),
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            pending_exception: None,
            trace: CycleTrace::default(),
            stats: SimStats::default(),
            trace_instructions: config.general.trace_instructions,
            has_next: true,
        }
    }

    /// Returns `false` once the PC has run past the program and the pipeline
    /// has drained. It never becomes `true` again.
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Returns `true` if every latch holds a bubble.
    pub const fn is_drained(&self) -> bool {
        self.if_id.is_none() && self.id_ex.is_none() && self.ex_mem.is_none() && self.mem_wb.is_none()
    }
}
