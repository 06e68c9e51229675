//! Simulation driver.
//!
//! Provides the [`Simulator`](simulator::Simulator) that advances the CPU one
//! clock at a time and exposes the per-cycle trace to a pipeline visualiser.

/// Cycle stepping and trace accessors.
pub mod simulator;

pub use simulator::Simulator;
