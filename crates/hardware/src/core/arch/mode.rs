//! MIPS Privilege Modes.
//!
//! This module defines the two privilege levels of the R3000 exception model.
//! It implements the following:
//! 1. **Mode Classification:** Kernel and User modes.
//! 2. **Serialization:** Conversion from the STATUS `KUc` bit.
//! 3. **Observability:** Human-readable naming and display formatting.

/// R3000 privilege mode levels.
///
/// Selected by STATUS bit 1 (`KUc`): clear for kernel mode, set for user mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeMode {
    /// Kernel mode. All addresses and coprocessor 0 are accessible.
    Kernel = 0,

    /// User mode. Addresses at or above `0x8000_0000` fault.
    User = 1,
}

impl PrivilegeMode {
    /// Converts the STATUS `KUc` bit to a privilege mode.
    ///
    /// # Arguments
    ///
    /// * `ku` - The value of STATUS bit 1.
    pub const fn from_ku_bit(ku: bool) -> Self {
        if ku { Self::User } else { Self::Kernel }
    }

    /// Returns the human-readable name of the privilege mode.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Kernel => "Kernel",
            Self::User => "User",
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
