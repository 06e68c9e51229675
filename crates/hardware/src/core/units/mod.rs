//! Execution units and functional components.
//!
//! This module contains the functional units driven by the Execute stage:
//! the single-cycle integer ALU and the multi-cycle multiply/divide unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Multi-cycle multiply/divide unit holding HI and LO.
pub mod mdu;
