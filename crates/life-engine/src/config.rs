//! Run configuration, validation, and error types.
//!
//! [`SimConfig`] replaces the implicit defaults of a run (step budget,
//! whether detection ends the run) with one explicit value that the
//! driver validates at construction.

use std::error::Error;
use std::fmt;

/// Default step budget.
pub const DEFAULT_MAX_STEPS: u64 = 1000;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_steps` is zero.
    InvalidStepBudget {
        /// The configured budget.
        value: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepBudget { value } => {
                write!(f, "max_steps must be at least 1, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for a [`SimulationDriver`](crate::SimulationDriver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// The run ends once the grid's step count reaches this value. Default: 1000.
    pub max_steps: u64,
    /// Whether a repeated state or an extinct board ends the run
    /// immediately. When `false`, detection is still latched but the
    /// run continues until the budget is exhausted. Default: `true`.
    pub stop_on_loop: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            stop_on_loop: true,
        }
    }
}

impl SimConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidStepBudget {
                value: self.max_steps,
            });
        }
        Ok(())
    }
}
