//! Error types for grid construction, cell access, and text loading.

use std::error::Error;
use std::fmt;

/// Errors raised by [`Grid`](crate::Grid) operations.
///
/// Every variant is a local validation failure: the caller passed an
/// invalid argument or malformed input. None of them are transient.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A dimension is zero or does not fit in an `i32` coordinate.
    InvalidDimension {
        /// Requested row count.
        rows: u64,
        /// Requested column count.
        cols: u64,
    },
    /// A coordinate lies outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        /// Offending row.
        row: i32,
        /// Offending column.
        col: i32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A raw cell code other than 0 (dead) or 1 (alive).
    InvalidState {
        /// The rejected code.
        code: u8,
    },
    /// A population density outside `[0.0, 1.0]` (or NaN).
    InvalidDensity {
        /// The rejected density.
        value: f64,
    },
    /// The text block has no lines, or its first line is blank.
    EmptyInput,
    /// A text line differs in length from the first line.
    InconsistentRowLength {
        /// Row index of the offending line.
        row: usize,
        /// Length of the first line.
        expected: usize,
        /// Length of the offending line.
        found: usize,
    },
    /// A character other than `'0'` or `'1'`.
    InvalidCharacter {
        /// Row index of the offending line.
        row: usize,
        /// Column index of the offending character.
        col: usize,
        /// The rejected character.
        found: char,
    },
    /// The text block's line count differs from the grid's row count.
    RowCountMismatch {
        /// The grid's configured row count.
        expected: u32,
        /// Number of lines in the text block.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
            Self::InvalidState { code } => {
                write!(f, "cell state must be 0 or 1, got {code}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be in [0.0, 1.0], got {value}")
            }
            Self::EmptyInput => write!(f, "input contains no cells"),
            Self::InconsistentRowLength {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {row} has {found} columns, expected {expected}"
                )
            }
            Self::InvalidCharacter { row, col, found } => {
                write!(
                    f,
                    "invalid character {found:?} at ({row}, {col}), expected '0' or '1'"
                )
            }
            Self::RowCountMismatch { expected, found } => {
                write!(f, "input has {found} rows, grid expects {expected}")
            }
        }
    }
}

impl Error for GridError {}
