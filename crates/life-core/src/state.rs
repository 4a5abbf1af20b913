//! Content-derived grid key for repeat detection.

use crate::hash;

/// Exact, bit-packed encoding of a grid's cell contents.
///
/// Cells are packed row-major, 64 per word, least-significant bit
/// first. The step counter is not part of the key: two grids with the
/// same shape and pattern produce equal keys at any step count.
///
/// Equality is exact, so a hash collision in a `HashSet`/`IndexMap`
/// can never be mistaken for a repeated state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalState {
    rows: u32,
    cols: u32,
    words: Vec<u64>,
}

impl CanonicalState {
    /// Pack a row-major boolean slice of length `rows * cols`.
    pub(crate) fn pack(rows: u32, cols: u32, cells: &[bool]) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        let mut words = vec![0u64; cells.len().div_ceil(64)];
        for (i, &alive) in cells.iter().enumerate() {
            if alive {
                words[i / 64] |= 1u64 << (i % 64);
            }
        }
        Self { rows, cols, words }
    }

    /// Row count of the encoded grid.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count of the encoded grid.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Packed cell words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of alive cells in the encoded grid.
    pub fn population(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// 64-bit FNV-1a fingerprint of the encoded contents.
    pub fn fingerprint(&self) -> u64 {
        hash::fingerprint(self.rows, self.cols, &self.words)
    }
}
