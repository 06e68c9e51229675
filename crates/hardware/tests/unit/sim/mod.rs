//! # Simulator Tests
//!
//! Tests for the driver API used to animate the pipeline.

/// Per-cycle accessors on `Simulator`.
pub mod simulator;
