//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (start PC, unit latencies, vector, STATUS).
//! 2. **Structures:** Hierarchical config for general and pipeline settings.
//! 3. **Validation:** `Config::from_json` parses and rejects values the pipeline cannot run.
//!
//! Configuration is supplied as JSON, or use `Config::default()` for the
//! classic R3000-style machine.

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address of the first user instruction (start of the text segment).
    pub const START_PC: u32 = crate::common::constants::TEXT_SEGMENT_BASE;

    /// Cycles from issuing a multiply until HI/LO hold the product.
    ///
    /// With the default, `mflo` directly after `mult` stalls for 13 cycles.
    pub const MULTIPLY_LATENCY: u32 = 14;

    /// Cycles from issuing a divide until HI/LO hold quotient and remainder.
    pub const DIVIDE_LATENCY: u32 = 35;

    /// General exception vector.
    pub const EXCEPTION_VECTOR: u32 = crate::common::constants::EXCEPTION_VECTOR;

    /// STATUS after reset: all interrupt mask bits set, interrupts enabled, kernel mode.
    pub const INITIAL_STATUS: u32 = crate::core::arch::cop0::STATUS_RESET;
}

/// Root configuration structure containing all simulator settings.
///
/// Every field has a default, so a partial document is accepted.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "pipeline": { "multiply_latency": 4 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x0040_0000);
/// assert_eq!(config.pipeline.multiply_latency, 4);
/// assert_eq!(config.pipeline.divide_latency, 35);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline timing and exception configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Arguments
    ///
    /// * `json` - The configuration document.
    ///
    /// # Returns
    ///
    /// The configuration, or a [`ConfigError`] for malformed JSON or an unusable value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value can be run by the pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.multiply_latency == 0 {
            return Err(ConfigError::Invalid {
                field: "pipeline.multiply_latency",
                reason: "latency must be at least 1 cycle".to_string(),
            });
        }
        if self.pipeline.divide_latency == 0 {
            return Err(ConfigError::Invalid {
                field: "pipeline.divide_latency",
                reason: "latency must be at least 1 cycle".to_string(),
            });
        }
        if self.general.start_pc % 4 != 0 {
            return Err(ConfigError::Invalid {
                field: "general.start_pc",
                reason: format!("{:#010x} is not word aligned", self.general.start_pc),
            });
        }
        if self.pipeline.exception_vector % 4 != 0 {
            return Err(ConfigError::Invalid {
                field: "pipeline.exception_vector",
                reason: format!("{:#010x} is not word aligned", self.pipeline.exception_vector),
            });
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log a pipeline diagram for every cycle at `info` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to the text segment base)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Pipeline timing and exception configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Multiply latency in cycles
    #[serde(default = "PipelineConfig::default_multiply_latency")]
    pub multiply_latency: u32,

    /// Divide latency in cycles
    #[serde(default = "PipelineConfig::default_divide_latency")]
    pub divide_latency: u32,

    /// Address the PC is redirected to when an exception commits
    #[serde(default = "PipelineConfig::default_exception_vector")]
    pub exception_vector: u32,

    /// STATUS register value after reset
    #[serde(default = "PipelineConfig::default_initial_status")]
    pub initial_status: u32,
}

impl PipelineConfig {
    /// Returns the default multiply latency.
    fn default_multiply_latency() -> u32 {
        defaults::MULTIPLY_LATENCY
    }

    /// Returns the default divide latency.
    fn default_divide_latency() -> u32 {
        defaults::DIVIDE_LATENCY
    }

    /// Returns the default exception vector.
    fn default_exception_vector() -> u32 {
        defaults::EXCEPTION_VECTOR
    }

    /// Returns the default reset STATUS value.
    fn default_initial_status() -> u32 {
        defaults::INITIAL_STATUS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            multiply_latency: defaults::MULTIPLY_LATENCY,
            divide_latency: defaults::DIVIDE_LATENCY,
            exception_vector: defaults::EXCEPTION_VECTOR,
            initial_status: defaults::INITIAL_STATUS,
        }
    }
}
