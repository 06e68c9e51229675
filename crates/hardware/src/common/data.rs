//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Privilege Validation:** Checking kernel-segment accesses made in user mode.
//! 2. **Fault Generation:** Selecting `AddressErrorOnLoad` or `AddressErrorOnStore`.
//! 3. **Observability:** Reporting the memory-stage operation of each cycle.

use crate::common::error::ExceptionCode;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// for privilege and alignment enforcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access from the Fetch stage.
    Fetch,

    /// Data read access from a load instruction.
    Read,

    /// Data write access from a store instruction.
    Write,
}

impl AccessType {
    /// Returns the address-error cause raised when this access faults.
    ///
    /// Fetches report the load variant, as on the R3000.
    pub const fn address_error(self) -> ExceptionCode {
        match self {
            Self::Fetch | Self::Read => ExceptionCode::AddressErrorOnLoad,
            Self::Write => ExceptionCode::AddressErrorOnStore,
        }
    }

    /// Returns the label shown in the pipeline view.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "Fetch",
            Self::Read => "Read",
            Self::Write => "Write",
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
