//! System Control Coprocessor (CP0).
//!
//! This module implements the R3000 coprocessor 0 register file. It provides:
//! 1. **Register Indices:** Constants for the CP0 registers addressed by `mfc0`/`mtc0`.
//! 2. **Field Masks:** STATUS bit layout, including the three-level KU/IE stack.
//! 3. **Register Storage:** The `Cop0` struct for maintaining architectural state.
//! 4. **Exception Entry and Return:** Recording an exception and pushing or popping
//!    the KU/IE stack.

use crate::common::error::MipsException;
use crate::core::arch::mode::PrivilegeMode;

/// TLB index register.
pub const INDEX: usize = 0;
/// TLB random register.
pub const RANDOM: usize = 1;
/// TLB entry low register.
pub const ENTRYLO: usize = 2;
/// Page table context register.
pub const CONTEXT: usize = 4;
/// Bad virtual address register.
pub const BADVADDR: usize = 8;
/// TLB entry high register.
pub const ENTRYHI: usize = 10;
/// Status register.
pub const STATUS: usize = 12;
/// Cause register.
pub const CAUSE: usize = 13;
/// Exception program counter.
pub const EPC: usize = 14;
/// Processor revision identifier.
pub const PRID: usize = 15;

/// STATUS: current interrupt enable.
pub const STATUS_IEC: u32 = 1 << 0;
/// STATUS: current kernel/user mode (set = user).
pub const STATUS_KUC: u32 = 1 << 1;
/// STATUS: the six-bit KU/IE stack (current, previous, old).
pub const STATUS_STACK_MASK: u32 = 0x3F;
/// STATUS: the four bits restored by `rfe` (current and previous).
pub const STATUS_RFE_MASK: u32 = 0xF;
/// STATUS: coprocessor 0 usable in user mode.
pub const STATUS_CU0: u32 = 1 << 28;

/// Reset value of STATUS: all interrupt masks set, kernel mode, interrupts enabled.
pub const STATUS_RESET: u32 = 0x0000_FF11;

/// Implementation/revision reported in PRID (R3000A).
const PRID_VALUE: u32 = 0x0000_0230;

/// Coprocessor 0 register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cop0 {
    regs: [u32; 32],
    vector: u32,
}

impl Cop0 {
    /// Creates the register file in its reset state.
    ///
    /// # Arguments
    ///
    /// * `status` - Initial STATUS value.
    /// * `vector` - Address every exception is dispatched to.
    pub fn new(status: u32, vector: u32) -> Self {
        let mut regs = [0; 32];
        regs[STATUS] = status;
        regs[PRID] = PRID_VALUE;
        Self { regs, vector }
    }

    /// Reads a CP0 register.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx & 0x1F]
    }

    /// Writes a CP0 register.
    ///
    /// PRID is read-only; writes to it are discarded.
    pub fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & 0x1F;
        if idx != PRID {
            self.regs[idx] = val;
        }
    }

    /// Returns the STATUS register.
    pub fn status(&self) -> u32 {
        self.regs[STATUS]
    }

    /// Returns the CAUSE register.
    pub fn cause(&self) -> u32 {
        self.regs[CAUSE]
    }

    /// Returns the EPC register.
    pub fn epc(&self) -> u32 {
        self.regs[EPC]
    }

    /// Returns the BADVADDR register.
    pub fn bad_vaddr(&self) -> u32 {
        self.regs[BADVADDR]
    }

    /// Returns `true` when STATUS.IEc is set.
    pub fn interrupts_enabled(&self) -> bool {
        self.status() & STATUS_IEC != 0
    }

    /// Returns `true` when STATUS.KUc selects user mode.
    pub fn in_user_mode(&self) -> bool {
        self.status() & STATUS_KUC != 0
    }

    /// Returns the current privilege mode.
    pub fn mode(&self) -> PrivilegeMode {
        PrivilegeMode::from_ku_bit(self.in_user_mode())
    }

    /// Returns `true` if coprocessor 0 instructions may execute now.
    pub fn cop0_usable(&self) -> bool {
        !self.in_user_mode() || self.status() & STATUS_CU0 != 0
    }

    /// Returns the handler address for an exception.
    ///
    /// The machine has a single vector, so the cause is not consulted.
    pub const fn exception_address(&self, _e: &MipsException) -> u32 {
        self.vector
    }

    /// Writes BADVADDR (when present), CAUSE and EPC for an exception.
    pub fn record_exception(&mut self, e: &MipsException) {
        if let Some(addr) = e.bad_vaddr() {
            self.regs[BADVADDR] = addr;
        }
        self.regs[CAUSE] = e.cause_register();
        self.regs[EPC] = e.epc();
    }

    /// Pushes the KU/IE stack on exception entry.
    ///
    /// Current becomes previous, previous becomes old, and the new current
    /// state is kernel mode with interrupts disabled.
    pub fn push_mode_stack(&mut self) {
        let old = self.regs[STATUS];
        self.regs[STATUS] = (old & !STATUS_STACK_MASK) | ((old << 2) & STATUS_STACK_MASK);
    }

    /// Pops the KU/IE stack for `rfe`.
    ///
    /// Previous becomes current and old becomes previous; the old pair is left
    /// unchanged.
    pub fn pop_mode_stack(&mut self) {
        let old = self.regs[STATUS];
        self.regs[STATUS] = (old & !STATUS_RFE_MASK) | ((old >> 2) & STATUS_RFE_MASK);
    }
}

impl Default for Cop0 {
    fn default() -> Self {
        Self::new(STATUS_RESET, crate::common::constants::EXCEPTION_VECTOR)
    }
}
