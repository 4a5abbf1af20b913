//! Test utilities for Life development.
//!
//! Well-known patterns as origin-relative `(row, col)` offsets, plus
//! [`grid_with`] to stamp one onto a fresh [`Grid`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use life_core::Grid;

/// A named pattern for table-driven tests.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
    /// Smallest period after which the pattern repeats in place.
    /// `None` for patterns that translate (spaceships).
    pub period: Option<u64>,
}

/// 2x2 still life.
pub const BLOCK: &[(i32, i32)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

/// Horizontal phase of the period-2 blinker.
pub const BLINKER: &[(i32, i32)] = &[(0, 0), (0, 1), (0, 2)];

/// Period-2 toad.
pub const TOAD: &[(i32, i32)] = &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];

/// Period-2 beacon.
pub const BEACON: &[(i32, i32)] = &[
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (2, 2),
    (2, 3),
    (3, 2),
    (3, 3),
];

/// South-east travelling glider.
pub const GLIDER: &[(i32, i32)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Period-3 pulsar in its 13x13 phase.
#[rustfmt::skip]
pub const PULSAR: &[(i32, i32)] = &[
    (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
    (2, 0), (2, 5), (2, 7), (2, 12),
    (3, 0), (3, 5), (3, 7), (3, 12),
    (4, 0), (4, 5), (4, 7), (4, 12),
    (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
    (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
    (8, 0), (8, 5), (8, 7), (8, 12),
    (9, 0), (9, 5), (9, 7), (9, 12),
    (10, 0), (10, 5), (10, 7), (10, 12),
    (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
];

/// Oscillators and still lifes with their periods.
pub const OSCILLATORS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: BLOCK,
        period: Some(1),
    },
    Pattern {
        name: "blinker",
        cells: BLINKER,
        period: Some(2),
    },
    Pattern {
        name: "toad",
        cells: TOAD,
        period: Some(2),
    },
    Pattern {
        name: "beacon",
        cells: BEACON,
        period: Some(2),
    },
    Pattern {
        name: "pulsar",
        cells: PULSAR,
        period: Some(3),
    },
];

/// Build a `rows x cols` grid with `cells` set alive, offset by `origin`.
///
/// Panics if the grid cannot be built or a cell lands out of bounds;
/// both are fixture bugs.
pub fn grid_with(rows: u32, cols: u32, cells: &[(i32, i32)], origin: (i32, i32)) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("fixture dimensions must be valid");
    for &(r, c) in cells {
        grid.set_cell(origin.0 + r, origin.1 + c, true)
            .expect("fixture cell must be in bounds");
    }
    grid
}

/// Build a grid from `'0'`/`'1'` rows.
pub fn grid_from_text(lines: &[&str]) -> Grid {
    let rows = lines.len() as u32;
    let cols = lines.first().map_or(0, |l| l.trim().len()) as u32;
    let mut grid = Grid::new(rows, cols).expect("fixture dimensions must be valid");
    grid.load_from_text(lines).expect("fixture text must be valid");
    grid
}
