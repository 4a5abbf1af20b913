//! Owned grid snapshots.

use life_core::Grid;

/// Grid contents captured after a given step.
///
/// The grid is a value copy; later changes to the live grid never reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Grid step count at capture time.
    pub step: u64,
    /// The captured grid.
    pub grid: Grid,
    /// FNV-1a fingerprint of `grid`'s cells.
    pub fingerprint: u64,
}

impl Frame {
    /// Snapshot `grid` at its current step.
    pub fn capture(grid: &Grid) -> Self {
        Self::new(grid.step_count(), grid.copy())
    }

    /// Wrap an owned grid as the frame for `step`.
    pub fn new(step: u64, grid: Grid) -> Self {
        let fingerprint = grid.fingerprint();
        Self {
            step,
            grid,
            fingerprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_independent_of_source() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(1, 1, true).unwrap();
        let frame = Frame::capture(&grid);
        grid.set_cell(0, 0, true).unwrap();
        grid.step();
        assert_eq!(frame.step, 0);
        assert_eq!(frame.grid.alive_count(), 1);
        assert_eq!(frame.fingerprint, frame.grid.fingerprint());
    }
}
