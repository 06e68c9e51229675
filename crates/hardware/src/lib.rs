//! MIPS five-stage pipeline simulator library.
//!
//! This crate implements a cycle-accurate MIPS I pipeline for teaching computer
//! architecture, with the following:
//! 1. **Core:** Fetch, decode, execute, memory and writeback stages with forwarding,
//!    load-use and branch stalls, branch delay slots, and a multi-cycle multiply/divide unit.
//! 2. **Exceptions:** Coprocessor 0 (STATUS, CAUSE, EPC, BADVADDR) with precise exceptions
//!    and selective squashing of younger instructions.
//! 3. **Memory:** Sparse, lazily allocated 32-bit address space plus the register file.
//! 4. **ISA:** Decoding and disassembly of the supported MIPS I subset.
//! 5. **Simulation:** Cycle stepping, per-cycle trace accessors, configuration and statistics.

/// Common types and constants (segments, access types, exceptions, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (pipeline, arch, execution units, exceptions).
pub mod core;
/// Instruction set (decode, instruction fields, ABI names, disassembly).
pub mod isa;
/// Cycle-stepping driver and trace accessors.
pub mod sim;
/// Memory and register file.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline latches, CP0, the multiply unit and stats.
pub use crate::core::Cpu;
/// Memory and register file handed to the simulator.
pub use crate::soc::Memory;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
