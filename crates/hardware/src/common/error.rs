//! Exception and Host Error definitions.
//!
//! This module defines the error handling mechanisms for the simulator. It provides:
//! 1. **Exception Representation:** The fixed MIPS cause-code taxonomy and an immutable
//!    exception value carrying the faulting PC, delay-slot flag and fault address.
//! 2. **Exception Attribution:** The pipeline stage that detected an exception.
//! 3. **Host Errors:** `thiserror`-derived errors for configuration and program loading,
//!    which are the only failures that ever cross the simulator API.

use std::fmt;

use thiserror::Error;

/// CAUSE register bit set when the exception occurred in a branch delay slot.
const CAUSE_BD_BIT: u32 = 1 << 31;

/// Shift of the coprocessor-error (CE) field in the CAUSE register.
const CAUSE_CE_SHIFT: u32 = 28;

/// Mask of the coprocessor-error (CE) field before shifting.
const CAUSE_CE_MASK: u32 = 0x3;

/// Shift of the exception-code (ExcCode) field in the CAUSE register.
const CAUSE_EXC_SHIFT: u32 = 2;

/// Mask of the exception-code (ExcCode) field before shifting.
const CAUSE_EXC_MASK: u32 = 0x1F;

/// MIPS exception cause codes.
///
/// The numeric values are the ExcCode values written into the CAUSE register.
/// TLB codes are part of the taxonomy but this machine has no TLB and never
/// raises them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ExceptionCode {
    /// External interrupt.
    Interrupt = 0,
    /// Store to a TLB entry not marked dirty.
    TlbProtectionFault = 1,
    /// TLB miss on a load or instruction fetch.
    TlbMissOnLoad = 2,
    /// TLB miss on a store.
    TlbMissOnStore = 3,
    /// Misaligned or privileged address on a load or instruction fetch.
    AddressErrorOnLoad = 4,
    /// Misaligned or privileged address on a store.
    AddressErrorOnStore = 5,
    /// Bus error on instruction fetch.
    ExternalBusErrorOnFetch = 6,
    /// Bus error on a data access.
    ExternalBusErrorData = 7,
    /// `syscall` instruction.
    Syscall = 8,
    /// `break` instruction.
    Break = 9,
    /// Reserved or unimplemented instruction encoding.
    IllegalInstruction = 10,
    /// Access to a coprocessor that is not usable in the current mode.
    CoprocessorUnusable = 11,
    /// Signed arithmetic overflow in `add`, `addi` or `sub`.
    Overflow = 12,
}

impl ExceptionCode {
    /// Returns the raw ExcCode value.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Converts a raw ExcCode value back into a cause.
    ///
    /// # Returns
    ///
    /// `None` for values outside the supported taxonomy.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Interrupt,
            1 => Self::TlbProtectionFault,
            2 => Self::TlbMissOnLoad,
            3 => Self::TlbMissOnStore,
            4 => Self::AddressErrorOnLoad,
            5 => Self::AddressErrorOnStore,
            6 => Self::ExternalBusErrorOnFetch,
            7 => Self::ExternalBusErrorData,
            8 => Self::Syscall,
            9 => Self::Break,
            10 => Self::IllegalInstruction,
            11 => Self::CoprocessorUnusable,
            12 => Self::Overflow,
            _ => return None,
        })
    }

    /// Returns the human-readable name of the cause.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "Interrupt",
            Self::TlbProtectionFault => "TLB protection fault",
            Self::TlbMissOnLoad => "TLB miss on load",
            Self::TlbMissOnStore => "TLB miss on store",
            Self::AddressErrorOnLoad => "Address error on load",
            Self::AddressErrorOnStore => "Address error on store",
            Self::ExternalBusErrorOnFetch => "Bus error on fetch",
            Self::ExternalBusErrorData => "Bus error on data",
            Self::Syscall => "Syscall",
            Self::Break => "Break",
            Self::IllegalInstruction => "Illegal instruction",
            Self::CoprocessorUnusable => "Coprocessor unusable",
            Self::Overflow => "Overflow",
        }
    }
}

impl fmt::Display for ExceptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pipeline stage in which an exception was detected.
///
/// Determines which in-flight instructions are younger than the faulting one
/// and must be squashed when the exception commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExceptionStage {
    /// Instruction fetch (address error on the PC).
    Fetch,
    /// Execute (overflow, illegal instruction, syscall, break, coprocessor).
    Execute,
    /// Memory access (address error on a load or store).
    Memory,
}

/// One architectural exception occurrence.
///
/// Values are immutable: the builder methods consume `self` and return a new
/// value, so an exception handed to the pipeline can never be altered behind
/// its back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipsException {
    code: ExceptionCode,
    pc: u32,
    branch_delay: bool,
    bad_vaddr: Option<u32>,
    coprocessor: u8,
}

impl MipsException {
    /// Creates an exception raised by the instruction at `pc`.
    ///
    /// # Arguments
    ///
    /// * `code` - The cause of the exception.
    /// * `pc` - Address of the faulting instruction.
    /// * `branch_delay` - Whether the faulting instruction occupies a branch delay slot.
    pub const fn new(code: ExceptionCode, pc: u32, branch_delay: bool) -> Self {
        Self {
            code,
            pc,
            branch_delay,
            bad_vaddr: None,
            coprocessor: 0,
        }
    }

    /// Returns a copy carrying the faulting virtual address.
    #[must_use]
    pub const fn with_bad_vaddr(self, addr: u32) -> Self {
        Self {
            bad_vaddr: Some(addr),
            ..self
        }
    }

    /// Returns a copy carrying the number of the unusable coprocessor.
    #[must_use]
    pub const fn with_coprocessor(self, coprocessor: u8) -> Self {
        Self {
            coprocessor,
            ..self
        }
    }

    /// Returns the cause of the exception.
    pub const fn code(&self) -> ExceptionCode {
        self.code
    }

    /// Returns the address of the faulting instruction itself.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Returns whether the faulting instruction was in a branch delay slot.
    pub const fn branch_delay(&self) -> bool {
        self.branch_delay
    }

    /// Returns the faulting virtual address, if the cause has one.
    pub const fn bad_vaddr(&self) -> Option<u32> {
        self.bad_vaddr
    }

    /// Returns the coprocessor number recorded for `CoprocessorUnusable`.
    pub const fn coprocessor(&self) -> u8 {
        self.coprocessor
    }

    /// Returns the restart address written into EPC.
    ///
    /// A fault in a delay slot restarts at the branch, so EPC points one
    /// instruction before the faulting PC.
    pub const fn epc(&self) -> u32 {
        if self.branch_delay {
            self.pc.wrapping_sub(4)
        } else {
            self.pc
        }
    }

    /// Returns the value written into the CAUSE register.
    ///
    /// Bit 31 is the branch-delay flag, bits 29..28 the coprocessor number and
    /// bits 6..2 the exception code.
    pub const fn cause_register(&self) -> u32 {
        let bd = if self.branch_delay { CAUSE_BD_BIT } else { 0 };
        bd | ((self.coprocessor as u32 & CAUSE_CE_MASK) << CAUSE_CE_SHIFT)
            | ((self.code.code() & CAUSE_EXC_MASK) << CAUSE_EXC_SHIFT)
    }
}

impl fmt::Display for MipsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:#010x}", self.code, self.pc)?;
        if self.branch_delay {
            write!(f, " (delay slot)")?;
        }
        if let Some(addr) = self.bad_vaddr {
            write!(f, " [badvaddr {addr:#010x}]")?;
        }
        if self.code == ExceptionCode::CoprocessorUnusable {
            write!(f, " [cop{}]", self.coprocessor)?;
        }
        Ok(())
    }
}

impl std::error::Error for MipsException {}

/// Errors raised while placing a program image into memory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The load address is not word aligned.
    #[error("program base {base:#010x} is not word aligned")]
    Misaligned {
        /// Requested base address.
        base: u32,
    },

    /// The image does not fit below the top of the 32-bit address space.
    #[error("program of {words} words at {base:#010x} overflows the address space")]
    AddressOverflow {
        /// Requested base address.
        base: u32,
        /// Number of instruction words in the image.
        words: usize,
    },
}

/// Errors raised while parsing or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulator cannot use.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
