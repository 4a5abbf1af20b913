//! Core types for Life simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Grid`] (cell matrix plus step counter) and its one-step
//! transition rule, the [`CanonicalState`] key used for repeat
//! detection, the two-valued [`Cell`] state, and [`GridError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod hash;
pub mod state;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, DEFAULT_DENSITY, OFFSETS_8};
pub use state::CanonicalState;
