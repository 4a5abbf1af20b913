//! Life: Conway's Game of Life with loop detection and frame recording.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Life sub-crates. For most users, adding `life` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use life::prelude::*;
//!
//! // A blinker on a 5x5 board.
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.load_from_text(&["00000", "00000", "01110", "00000", "00000"]).unwrap();
//!
//! let driver = SimulationDriver::new(grid, 100, true).unwrap();
//! let recording = Recorder::new(driver).run_to_completion();
//! assert_eq!(recording.result.reason, TerminationReason::Loop);
//! assert_eq!(recording.result.loop_period, Some(2));
//! assert_eq!(recording.frames.len(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `life-core` | `Grid`, `Cell`, `CanonicalState`, `GridError` |
//! | [`engine`] | `life-engine` | `SimulationDriver`, `SimConfig`, results and metrics |
//! | [`replay`] | `life-replay` | `Recorder`, frames, text frame I/O, comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid model and transition rule (`life-core`).
pub use life_core as grid;

/// Simulation driver with loop detection (`life-engine`).
///
/// [`engine::SimulationDriver`] steps a grid until it repeats, dies out,
/// or exhausts its step budget.
pub use life_engine as engine;

/// Frame recording and text frame streams (`life-replay`).
pub use life_replay as replay;

/// Common imports for typical Life usage.
///
/// ```rust
/// use life::prelude::*;
/// ```
pub mod prelude {
    pub use life_core::{Cell, Grid, GridError};
    pub use life_engine::{
        ConfigError, DriverState, SimConfig, SimulationDriver, SimulationResult, StepOutcome,
        TerminationReason,
    };
    pub use life_replay::{Frame, FrameReader, FrameWriter, Recorder, RecordingResult};
}
