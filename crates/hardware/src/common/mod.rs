//! Common utilities and types used throughout the MIPS pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Segment addresses, block geometry, and instruction width.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Exception cause codes, exception values, and host error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Exception values and host error types.
pub mod error;

pub use data::AccessType;
pub use error::{ConfigError, ExceptionCode, ExceptionStage, LoadError, MipsException};
