//! Configuration system for the APEX simulator.
//!
//! Supplied as JSON (`Config` derives `serde::Deserialize`) or built with
//! `Config::default()` for the CLI's unconfigured path.

use serde::Deserialize;

use crate::common::constants::{CODE_BASE_ADDR, DATA_MEMORY_SIZE};

/// Default configuration constants, mirrored in [`Config::default`].
mod defaults {
    /// Default data memory size, matching [`super::CODE_BASE_ADDR`]'s sibling
    /// constant.
    pub const DATA_MEMORY_SIZE: usize = super::DATA_MEMORY_SIZE;

    /// Default code memory base address.
    pub const CODE_BASE: i64 = super::CODE_BASE_ADDR;

    /// Default hazard-resolution variant: no forwarding.
    pub const VARIANT: super::Variant = super::Variant::NoForwarding;
}

/// Which of the two hazard-resolution strategies Decode uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Decode stalls until a producing instruction retires; no bypass
    /// network is consulted.
    NoForwarding,
    /// Decode may bypass register operands from MEM1/MEM2/WB, and the
    /// zero flag from MEM1/MEM2, before falling back to the register
    /// file's validity bit.
    Forwarding,
}

/// Top-level simulator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General run parameters (tracing, cycle budget).
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline hazard-resolution behavior.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Memory sizing and addressing.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// Run-level parameters independent of pipeline or memory shape.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Whether to emit the per-cycle stage trace (`display` CLI mode turns
    /// this on; it's also independently settable for embedding or tests).
    #[serde(default)]
    pub trace: bool,
    /// Upper bound on simulated cycles; `None` means run until HALT
    /// retires or the program falls off the end of code memory.
    #[serde(default)]
    pub cycle_limit: Option<u64>,
}

/// Which hazard-resolution variant the pipeline uses.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// No-forwarding (Variant A) or forwarding (Variant B).
    #[serde(default = "defaults_variant")]
    pub variant: Variant,
}

fn defaults_variant() -> Variant {
    defaults::VARIANT
}

/// Data and code memory sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of addressable cells in data memory.
    #[serde(default = "defaults_data_memory_size")]
    pub data_memory_size: usize,
    /// Address of the first code-memory word.
    #[serde(default = "defaults_code_base")]
    pub code_base: i64,
}

fn defaults_data_memory_size() -> usize {
    defaults::DATA_MEMORY_SIZE
}

fn defaults_code_base() -> i64 {
    defaults::CODE_BASE
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            cycle_limit: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            variant: defaults::VARIANT,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_memory_size: defaults::DATA_MEMORY_SIZE,
            code_base: defaults::CODE_BASE,
        }
    }
}

impl Default for Config {
    /// The configuration the CLI uses when the user supplies no config
    /// file: no tracing, unbounded cycles, Variant A (no forwarding),
    /// 4000-cell data memory starting code at address 4000.
    ///
    /// ```
    /// use apex_core::config::{Config, Variant};
    ///
    /// let cfg = Config::default();
    /// assert_eq!(cfg.pipeline.variant, Variant::NoForwarding);
    /// assert_eq!(cfg.memory.code_base, 4000);
    /// ```
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            pipeline: PipelineConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}
