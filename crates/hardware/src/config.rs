//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory map, latencies, run limits).
//! 2. **Structures:** Hierarchical config for general settings, memory, and the CSR unit.
//! 3. **Parsing:** JSON deserialization with every field optional.
//!
//! Configuration is supplied as a JSON file to the CLI, or use `Config::default()`.

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Base address of main system RAM (2 GiB).
    ///
    /// Program images are loaded here and execution starts here.
    pub const RAM_BASE: u32 = 0x8000_0000;

    /// Total size of main system RAM (1 MiB).
    pub const RAM_SIZE: usize = 1024 * 1024;

    /// Data-bus grant latency in cycles (0 = granted in the request cycle).
    pub const MEMORY_LATENCY: u64 = 0;

    /// Reset value of the machine trap vector.
    pub const MTVEC: u32 = RAM_BASE;

    /// Cycles between a CSR start pulse and its done pulse.
    pub const CSR_LATENCY: u64 = 1;

    /// Cycle limit of a simulation run.
    pub const MAX_CYCLES: u64 = 10_000_000;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_cycles": 5000
///     },
///     "memory": {
///         "size": 65536,
///         "latency": 2
///     },
///     "csr": {
///         "mtvec": 2147483904
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, 5000);
/// assert_eq!(config.memory.size, 65536);
/// assert_eq!(config.memory.base, 0x8000_0000);
/// assert_eq!(config.csr.mtvec, 0x8000_0100);
/// assert_eq!(config.csr.latency, 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// CSR and trap unit configuration
    #[serde(default)]
    pub csr: CsrConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON document; missing sections and fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or [`SimError::Config`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Raise the default log filter to `trace` (per-stage instruction events)
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to RAM base)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Direct execution mode: the run ends at the first trap instead of jumping to MTVEC.
    #[serde(default = "GeneralConfig::default_direct_mode")]
    pub direct_mode: bool,

    /// Maximum number of cycles to simulate
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::RAM_BASE
    }

    /// Default direct mode to true so bare-metal test programs end on `ebreak`.
    const fn default_direct_mode() -> bool {
        true
    }

    /// Returns the default cycle limit.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::RAM_BASE,
            direct_mode: true,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// RAM base address
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u32,

    /// RAM size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Data-bus grant latency in cycles
    #[serde(default = "MemoryConfig::default_latency")]
    pub latency: u64,
}

impl MemoryConfig {
    /// Returns the default RAM base address.
    const fn default_base() -> u32 {
        defaults::RAM_BASE
    }

    /// Returns the default RAM size in bytes.
    const fn default_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the default grant latency.
    const fn default_latency() -> u64 {
        defaults::MEMORY_LATENCY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: defaults::RAM_BASE,
            size: defaults::RAM_SIZE,
            latency: defaults::MEMORY_LATENCY,
        }
    }
}

/// CSR and trap unit configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CsrConfig {
    /// Reset trap vector (direct mode, low two bits ignored)
    #[serde(default = "CsrConfig::default_mtvec")]
    pub mtvec: u32,

    /// Value of `mhartid`
    #[serde(default)]
    pub hart_id: u32,

    /// Cycles from CSR start to done (minimum 1)
    #[serde(default = "CsrConfig::default_latency")]
    pub latency: u64,
}

impl CsrConfig {
    /// Returns the default reset trap vector.
    const fn default_mtvec() -> u32 {
        defaults::MTVEC
    }

    /// Returns the default CSR access latency.
    const fn default_latency() -> u64 {
        defaults::CSR_LATENCY
    }
}

impl Default for CsrConfig {
    fn default() -> Self {
        Self {
            mtvec: defaults::MTVEC,
            hart_id: 0,
            latency: defaults::CSR_LATENCY,
        }
    }
}
