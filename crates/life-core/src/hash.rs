//! FNV-1a fingerprinting of grid contents.
//!
//! Fast, deterministic, not cryptographically secure. Fingerprints are
//! used for cheap frame comparison and log output; exact repeat
//! detection always goes through [`CanonicalState`](crate::CanonicalState).

const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const PRIME: u64 = 0x00000100000001B3;

/// Fold `bytes` into a running FNV-1a state.
#[inline]
fn fold(hash: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(hash, |h, &b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}

/// Hash grid dimensions followed by bit-packed cell words.
///
/// Dimensions are folded in first so that two grids with the same
/// packed bits but different shapes hash differently. All values are
/// fed little-endian.
pub fn fingerprint(rows: u32, cols: u32, words: &[u64]) -> u64 {
    let hash = fold(OFFSET_BASIS, &rows.to_le_bytes());
    let hash = fold(hash, &cols.to_le_bytes());
    words
        .iter()
        .fold(hash, |h, w| fold(h, &w.to_le_bytes()))
}
