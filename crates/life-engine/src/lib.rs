//! Simulation driver for Life grids.
//!
//! [`SimulationDriver`] advances a [`Grid`](life_core::Grid) one
//! transition at a time, remembers a bounded table of previously seen
//! states, and decides when a run ends: a repeated state (loop), an
//! extinct board, or an exhausted step budget.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod metrics;

pub use config::{ConfigError, SimConfig, DEFAULT_MAX_STEPS};
pub use driver::{
    DriverState, SimulationDriver, SimulationResult, StepOutcome, TerminationReason,
    SEEN_STATE_CAPACITY,
};
pub use metrics::RunMetrics;
