//! Set operations over sorted, duplicate-free row-index lists.

use alloc::vec::Vec;
use hashbrown::HashSet;

/// Merges two ascending index lists into their ascending, duplicate-free union.
///
/// Two-pointer merge; a value equal to the last emitted one is skipped whichever
/// side it comes from.
pub fn union_sorted(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() || j < right.len() {
        let next = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) if l <= r => {
                i += 1;
                l
            }
            (Some(_), Some(&r)) => {
                j += 1;
                r
            }
            (Some(&l), None) => {
                i += 1;
                l
            }
            (None, Some(&r)) => {
                j += 1;
                r
            }
            (None, None) => break,
        };
        if out.last() != Some(&next) {
            out.push(next);
        }
    }

    out
}

/// Returns the indexes of `right` that are also in `left`, in `right`'s order.
///
/// A presence set is built from `left`; filtering keeps `right` sorted.
pub fn intersect_sorted(left: &[usize], right: &[usize]) -> Vec<usize> {
    let present: HashSet<usize> = left.iter().copied().collect();
    right.iter().copied().filter(|i| present.contains(i)).collect()
}
