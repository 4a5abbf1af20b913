//! Frame-sequence comparison for determinism checks.
//!
//! Fingerprints are compared first; equal fingerprints are confirmed
//! with an exact cell comparison so a collision is never reported as a
//! match.

use crate::frame::Frame;

/// The first point at which two frame sequences differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Divergence {
    /// Frames at `index` hold different grids.
    Frame {
        /// Position in both sequences.
        index: usize,
        /// Step recorded in the left frame.
        step: u64,
        /// First differing cell in row-major order, when both grids
        /// have the same shape.
        cell: Option<(u32, u32)>,
        /// Fingerprint of the left frame.
        left: u64,
        /// Fingerprint of the right frame.
        right: u64,
    },
    /// One sequence is a strict prefix of the other.
    Length {
        /// Left sequence length.
        left: usize,
        /// Right sequence length.
        right: usize,
    },
}

/// Compare `a` and `b` frame by frame; `None` means identical contents.
///
/// Step counters are not compared, only shapes and cells.
pub fn first_divergence(a: &[Frame], b: &[Frame]) -> Option<Divergence> {
    for (index, (left, right)) in a.iter().zip(b).enumerate() {
        if left.fingerprint == right.fingerprint && left.grid.equals_state(&right.grid) {
            continue;
        }
        return Some(Divergence::Frame {
            index,
            step: left.step,
            cell: first_differing_cell(left, right),
            left: left.fingerprint,
            right: right.fingerprint,
        });
    }
    if a.len() != b.len() {
        return Some(Divergence::Length {
            left: a.len(),
            right: b.len(),
        });
    }
    None
}

fn first_differing_cell(left: &Frame, right: &Frame) -> Option<(u32, u32)> {
    let (l, r) = (&left.grid, &right.grid);
    if l.rows() != r.rows() || l.cols() != r.cols() {
        return None;
    }
    let i = l.cells().iter().zip(r.cells()).position(|(x, y)| x != y)?;
    let cols = l.cols() as usize;
    Some(((i / cols) as u32, (i % cols) as u32))
}
