//! Frame recording and replay for Life simulations.
//!
//! Captures an owned snapshot of the grid after every step so a run can
//! be rendered, written out, or checked for determinism afterwards.
//!
//! # Architecture
//!
//! - [`Recorder`] wraps a [`SimulationDriver`](life_engine::SimulationDriver)
//!   and appends one [`Frame`] per step
//! - [`FrameWriter`] streams frames to any `Write` sink as text
//! - [`FrameReader`] parses that text back from any `BufRead` source
//! - [`first_divergence`] compares two frame sequences
//!
//! # Format
//!
//! ```text
//! # step 0
//! 000
//! 111
//! 000
//!
//! # step 1
//! ...
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod frame;
pub mod reader;
pub mod recorder;
pub mod writer;

pub use compare::{first_divergence, Divergence};
pub use error::ReplayError;
pub use frame::Frame;
pub use reader::FrameReader;
pub use recorder::{Recorder, RecordingResult};
pub use writer::FrameWriter;
