//! Rectangular Life grid with an absorbing (non-wrapping) boundary.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::GridError;
use crate::hash;
use crate::state::CanonicalState;

/// Default alive probability for random population.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// All 8 neighbour offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Next state of a cell under the standard B3/S23 rule.
///
/// A live cell survives with 2 or 3 live neighbours; a dead cell is
/// born with exactly 3. Every other cell is dead next generation.
#[inline]
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    matches!((alive, live_neighbours), (true, 2) | (_, 3))
}

/// A rectangular matrix of alive/dead cells plus a step counter.
///
/// Each cell has coordinate `(row, col)`. Neighbours are the up-to-8
/// adjacent cells; positions outside the grid count as dead (no
/// wraparound), so corners have 3 neighbours and edges have 5.
///
/// The derived `PartialEq` compares the step counter as well; use
/// [`equals_state`](Grid::equals_state) to compare contents only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    /// Row-major, `rows * cols` long.
    cells: Vec<bool>,
    step_count: u64,
}

impl Grid {
    /// Largest allowed dimension: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Largest allowed cell count (`rows * cols`).
    pub const MAX_CELLS: u64 = 1 << 32;

    /// Create an all-dead grid of `rows * cols` cells at step 0.
    ///
    /// Returns `Err(GridError::InvalidDimension)` if either dimension is 0
    /// or exceeds [`MAX_DIM`](Self::MAX_DIM), or if the cell count exceeds
    /// [`MAX_CELLS`](Self::MAX_CELLS). Nothing is allocated on failure.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        let len = checked_len(u64::from(rows), u64::from(cols))?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
            step_count: 0,
        })
    }

    /// Build a grid from nested rows, sized to match them.
    ///
    /// Fails with `InvalidDimension` for zero rows or an empty first row,
    /// and `InconsistentRowLength` for ragged input.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        checked_len(rows.len() as u64, width as u64)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::InconsistentRowLength {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            // Both fit: checked_len bounds them by MAX_DIM.
            rows: rows.len() as u32,
            cols: width as u32,
            cells: rows.concat(),
            step_count: 0,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Transitions applied since construction or the last reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Zero the step counter, leaving cells untouched.
    ///
    /// Used by the simulation driver's reset.
    pub fn reset_step_count(&mut self) {
        self.step_count = 0;
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// One row of cell states, or `None` if `row` is out of range.
    pub fn row(&self, row: u32) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    #[inline]
    fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.rows && (col as u32) < self.cols
    }

    #[inline]
    fn offset(&self, row: i32, col: i32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn checked_offset(&self, row: i32, col: i32) -> Result<usize, GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    /// Whether the cell at `(row, col)` is alive.
    pub fn get_cell(&self, row: i32, col: i32) -> Result<bool, GridError> {
        let i = self.checked_offset(row, col)?;
        Ok(self.cells[i])
    }

    /// Set the cell at `(row, col)` alive or dead.
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) -> Result<(), GridError> {
        let i = self.checked_offset(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Set the cell at `(row, col)` from a raw code (0 = dead, 1 = alive).
    ///
    /// The code is validated before the coordinate, so an invalid code
    /// is reported as `InvalidState` even when the position is also bad.
    pub fn set_cell_state(&mut self, row: i32, col: i32, code: u8) -> Result<(), GridError> {
        let cell = Cell::try_from(code)?;
        self.set_cell(row, col, cell.is_alive())
    }

    /// In-bounds neighbour coordinates of `(row, col)`.
    pub fn neighbours(&self, row: i32, col: i32) -> Result<SmallVec<[(i32, i32); 8]>, GridError> {
        self.checked_offset(row, col)?;
        Ok(OFFSETS_8
            .iter()
            .map(|&(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| self.in_bounds(r, c))
            .collect())
    }

    /// Number of alive cells among the up-to-8 neighbours of `(row, col)`.
    pub fn count_alive_neighbors(&self, row: i32, col: i32) -> Result<u8, GridError> {
        self.checked_offset(row, col)?;
        Ok(self.live_neighbours(row, col))
    }

    /// Caller guarantees `(row, col)` is in bounds.
    #[inline]
    fn live_neighbours(&self, row: i32, col: i32) -> u8 {
        let mut count = 0;
        for (dr, dc) in OFFSETS_8 {
            let (r, c) = (row + dr, col + dc);
            if self.in_bounds(r, c) && self.cells[self.offset(r, c)] {
                count += 1;
            }
        }
        count
    }

    /// Apply one transition to every cell, then increment the step count.
    ///
    /// Neighbour counts are taken from the pre-step cells; the next
    /// generation is built in a separate buffer and swapped in whole.
    pub fn step(&mut self) {
        let mut next = Vec::with_capacity(self.cells.len());
        for r in 0..self.rows as i32 {
            for c in 0..self.cols as i32 {
                let alive = self.cells[self.offset(r, c)];
                next.push(next_state(alive, self.live_neighbours(r, c)));
            }
        }
        self.cells = next;
        self.step_count += 1;
    }

    /// A stepped copy of this grid; `self` is left untouched.
    pub fn next_generation(&self) -> Self {
        let mut next = self.copy();
        next.step();
        next
    }

    /// `true` iff every cell is dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Independent deep copy, including the step count.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Kill every cell and reset the step count.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.step_count = 0;
    }

    /// Populate every cell independently alive with probability `density`,
    /// drawing from a freshly seeded ChaCha8 stream. Resets the step count.
    pub fn randomize(&mut self, density: f64) -> Result<(), GridError> {
        let mut rng = ChaCha8Rng::from_rng(&mut rand::rng());
        self.randomize_with(density, &mut rng)
    }

    /// Deterministic variant of [`randomize`](Self::randomize): identical
    /// seeds produce identical grids.
    pub fn randomize_seeded(&mut self, density: f64, seed: u64) -> Result<(), GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.randomize_with(density, &mut rng)
    }

    /// Populate from a caller-supplied RNG. Resets the step count.
    pub fn randomize_with<R: Rng>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity { value: density });
        }
        for cell in &mut self.cells {
            *cell = rng.random_bool(density);
        }
        self.step_count = 0;
        Ok(())
    }

    /// Replace the cells from a block of `'0'`/`'1'` lines.
    ///
    /// Surrounding whitespace on each line is ignored. The line count
    /// must equal the grid's existing row count; the column count is
    /// taken from the input. On error the grid is left unchanged.
    pub fn load_from_text<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), GridError> {
        let Some(first) = lines.first() else {
            return Err(GridError::EmptyInput);
        };
        let width = first.as_ref().trim().chars().count();
        if width == 0 {
            return Err(GridError::EmptyInput);
        }

        let mut cells = Vec::with_capacity(lines.len() * width);
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim();
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentRowLength {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '0' => cells.push(false),
                    '1' => cells.push(true),
                    found => return Err(GridError::InvalidCharacter { row, col, found }),
                }
            }
        }

        if lines.len() != self.rows as usize {
            return Err(GridError::RowCountMismatch {
                expected: self.rows,
                found: lines.len(),
            });
        }
        checked_len(u64::from(self.rows), width as u64)?;

        self.cols = width as u32;
        self.cells = cells;
        self.step_count = 0;
        Ok(())
    }

    /// Split `text` into lines and delegate to [`load_from_text`](Self::load_from_text).
    pub fn load_from_str(&mut self, text: &str) -> Result<(), GridError> {
        let lines: Vec<&str> = text.lines().collect();
        self.load_from_text(&lines)
    }

    /// Render as newline-terminated rows of `'0'`/`'1'`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for row in self.cells.chunks(self.cols as usize) {
            out.extend(row.iter().map(|&alive| if alive { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }

    /// Content key for repeat detection; ignores the step count.
    pub fn canonical_key(&self) -> CanonicalState {
        CanonicalState::pack(self.rows, self.cols, &self.cells)
    }

    /// 64-bit FNV-1a fingerprint of the cell contents.
    pub fn fingerprint(&self) -> u64 {
        let key = self.canonical_key();
        hash::fingerprint(key.rows(), key.cols(), key.words())
    }

    /// `true` iff both grids have identical shape and cells.
    pub fn equals_state(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }

    /// `true` if this grid has the same contents as `previous`.
    pub fn is_stable(&self, previous: &Grid) -> bool {
        self.equals_state(previous)
    }
}

/// Human-facing view: a `Step: N` header, then `*` for alive and a space
/// for dead. Not the canonical text format; see [`Grid::to_text`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step: {}", self.step_count)?;
        for row in self.cells.chunks(self.cols as usize) {
            let line: String = row.iter().map(|&alive| if alive { '*' } else { ' ' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Validate dimensions and return the cell count.
fn checked_len(rows: u64, cols: u64) -> Result<usize, GridError> {
    let max = u64::from(Grid::MAX_DIM);
    if rows == 0 || cols == 0 || rows > max || cols > max {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .filter(|&n| n <= Grid::MAX_CELLS)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(GridError::InvalidDimension { rows, cols })
}
