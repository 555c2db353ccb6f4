use crate::index::ValueSet;
use std::hash::Hash;

/// Intersect per-token candidate sets.
///
/// The smallest set (first one on ties) drives the scan, so the cost is
/// `O(|smallest| * sets.len())` and the output follows that set's insertion
/// order. Returns an empty list when `sets` is empty or the smallest set is.
pub fn intersect<T: Copy + Eq + Hash>(sets: &[ValueSet<T>]) -> Vec<T> {
    let Some((basis_idx, basis)) = sets.iter().enumerate().min_by_key(|(_, s)| s.len()) else {
        return Vec::new();
    };
    if basis.is_empty() {
        return Vec::new();
    }

    basis
        .iter()
        .copied()
        .filter(|v| {
            sets.iter()
                .enumerate()
                .all(|(i, s)| i == basis_idx || s.contains(v))
        })
        .collect()
}
