//! Solidity compiler settings.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Optimizer runs used when none are configured.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Optimizer flags passed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Whether the optimizer is enabled
    #[serde(default)]
    pub enabled: bool,
    /// Expected number of contract executions (code size vs. gas cost trade-off)
    #[serde(default = "default_runs")]
    pub runs: u32,
}

const fn default_runs() -> u32 {
    DEFAULT_OPTIMIZER_RUNS
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self::disabled(DEFAULT_OPTIMIZER_RUNS)
    }
}

impl OptimizerSettings {
    pub const fn enabled(runs: u32) -> Self {
        Self {
            enabled: true,
            runs,
        }
    }

    /// Optimizer turned off. `runs` is kept as-is but ignored.
    pub const fn disabled(runs: u32) -> Self {
        Self {
            enabled: false,
            runs,
        }
    }

    /// Runs value the compiler should honour, `None` when the optimizer is off.
    pub const fn effective_runs(&self) -> Option<u32> {
        if self.enabled {
            Some(self.runs)
        } else {
            None
        }
    }
}

/// Compilation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// Solidity language version, e.g. `0.8.19`
    pub version: String,
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

impl CompilerSettings {
    pub fn new(version: impl Into<String>, optimizer: OptimizerSettings) -> Self {
        Self {
            version: version.into(),
            optimizer,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::EmptyCompilerVersion);
        }
        if self.optimizer.enabled && self.optimizer.runs == 0 {
            return Err(ConfigError::InvalidOptimizerRuns);
        }

        Ok(())
    }
}
