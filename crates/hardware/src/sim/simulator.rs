//! Simulator: owns the CPU and answers questions about the last cycle.
//!
//! The driver calls [`Simulator::step`] once per clock and then queries the
//! accessors to animate the pipeline. Every accessor describes the state
//! committed by the most recent `step`.

use crate::common::data::AccessType;
use crate::common::error::ExceptionCode;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::trace::{CycleTrace, ForwardPath, Stage};
use crate::isa::abi::reg_name;
use crate::isa::disasm;
use crate::isa::instruction::InstructionBits;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural and pipeline state.
#[derive(Clone, Debug)]
pub struct Simulator {
    cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator running the program held in `memory`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::{Config, Memory, Simulator};
    ///
    /// let mut memory = Memory::new();
    /// // addi $t0, $zero, 5
    /// memory.load_program(0x0040_0000, &[0x2008_0005]).unwrap();
    ///
    /// let mut sim = Simulator::new(memory, &Config::default());
    /// while sim.has_next_instruction() {
    ///     sim.step();
    /// }
    /// assert_eq!(sim.cpu().memory.read_register(8), 5);
    /// ```
    pub fn new(memory: Memory, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(memory, config),
        }
    }

    /// Advances the simulator by one clock cycle.
    pub fn step(&mut self) {
        self.cpu.tick();
    }

    /// Returns `false` once the program has run off its end and the pipeline has drained.
    pub const fn has_next_instruction(&self) -> bool {
        self.cpu.has_next()
    }

    /// Returns the CPU state.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Returns the CPU state for modification between cycles.
    pub const fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Returns the full trace of the last cycle.
    pub const fn trace(&self) -> &CycleTrace {
        &self.cpu.trace
    }

    /// Returns the accumulated statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns whether `stage` held an instruction during the last cycle.
    pub const fn stage_occurred(&self, stage: Stage) -> bool {
        self.cpu.trace.stage(stage)
    }

    /// Returns whether `path` supplied an operand during the last cycle.
    pub const fn forwarding_occurred(&self, path: ForwardPath) -> bool {
        self.cpu.trace.forwarding.get(path)
    }

    /// Returns whether a branch or jump redirected the PC during the last cycle.
    pub const fn branch_occurred(&self) -> bool {
        self.cpu.trace.branch_taken
    }

    /// Returns whether a load-use or branch-use hazard stalled the last cycle.
    pub const fn stall_occurred(&self) -> bool {
        self.cpu.trace.stall
    }

    /// Returns whether `mfhi`/`mflo` waited for the multiply/divide unit.
    pub const fn multiplier_stall_occurred(&self) -> bool {
        self.cpu.trace.multiplier_stall
    }

    /// Returns the cause of the exception taken during the last cycle.
    pub const fn exception_taken(&self) -> Option<ExceptionCode> {
        self.cpu.trace.exception
    }

    /// Returns the mnemonic of the instruction now in IF/ID, or `"nop"`.
    pub fn fetched_mnemonic(&self) -> &'static str {
        self.cpu.if_id.map_or("nop", |e| disasm::mnemonic(e.inst))
    }

    /// Returns the disassembly of the instruction now in IF/ID, or `"nop"`.
    pub fn fetched_disassembly(&self) -> String {
        self.cpu
            .if_id
            .map_or_else(|| "nop".to_string(), |e| disasm::disassemble(e.inst))
    }

    /// Returns the operand labels of the instruction now in ID/EX.
    ///
    /// R-type instructions show both source registers; all others show rs and
    /// the signed immediate.
    pub fn decode_labels(&self) -> Option<[String; 2]> {
        self.cpu.id_ex.map(|e| {
            let rs = format!("Rs: {}", reg_name(e.inst.rs()));
            if e.inst.is_r_type() {
                [rs, format!("Rt: {}", reg_name(e.inst.rt()))]
            } else {
                [rs, format!("Imm: {}", e.imm)]
            }
        })
    }

    /// Returns the operator the Execute stage performed during the last cycle.
    pub const fn alu_symbol(&self) -> Option<&'static str> {
        self.cpu.trace.alu_symbol
    }

    /// Returns the kind of memory access made during the last cycle.
    pub fn memory_operation(&self) -> Option<AccessType> {
        self.cpu.trace.memory_access.map(|(kind, _)| kind)
    }

    /// Returns the address of the memory access made during the last cycle, as `0x%08x`.
    pub fn memory_address(&self) -> Option<String> {
        self.cpu
            .trace
            .memory_access
            .map(|(_, addr)| format!("{addr:#010x}"))
    }

    /// Returns the ABI name of the register written back during the last cycle.
    pub fn writeback_register(&self) -> Option<&'static str> {
        self.cpu.trace.written_register.map(reg_name)
    }
}
