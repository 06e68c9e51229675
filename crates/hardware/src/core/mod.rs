//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! pipeline, execution units, architecture-specific components, and the
//! orchestrator that coordinates all components.

/// Architecture-specific components (CP0, register file, privilege modes).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals, trace).
pub mod pipeline;

/// Execution units (ALU, multiply/divide unit).
pub mod units;

pub use self::cpu::Cpu;
