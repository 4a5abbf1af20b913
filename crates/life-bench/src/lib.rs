//! Benchmark profiles for the Life simulation crates.
//!
//! - [`reference_grid`]: 100x100 seeded soup (10K cells)
//! - [`stress_grid`]: 316x316 seeded soup (~100K cells)
//! - [`reference_driver`]: driver over [`reference_grid`] that never
//!   stops early

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use life_core::{Grid, GridError, DEFAULT_DENSITY};
use life_engine::SimulationDriver;

/// A `rows x cols` grid filled from `seed` at the default density.
pub fn soup(rows: u32, cols: u32, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new(rows, cols)?;
    grid.randomize_seeded(DEFAULT_DENSITY, seed)?;
    Ok(grid)
}

/// 100x100 reference soup.
pub fn reference_grid(seed: u64) -> Grid {
    soup(100, 100, seed).unwrap()
}

/// 316x316 stress soup.
pub fn stress_grid(seed: u64) -> Grid {
    soup(316, 316, seed).unwrap()
}

/// Driver over the reference soup with loop stopping off, so every run
/// costs exactly `max_steps` transitions.
pub fn reference_driver(seed: u64, max_steps: u64) -> SimulationDriver {
    SimulationDriver::new(reference_grid(seed), max_steps, false).unwrap()
}
