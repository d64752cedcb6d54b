//! Searching
//!
//! Binary search over ascending slices.

use std::cmp::Ordering;

/// Find `key` in the ascending slice `items`
///
/// Returns the index of an element equal to `key`, or `None`. Uses at most
/// `lg n + 1` comparisons. With duplicates, any matching index may be
/// returned.
pub fn binary_search<T: Ord>(items: &[T], key: &T) -> Option<usize> {
    let mut lo = 0;
    let mut hi = items.len();

    // Half-open window [lo, hi)
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match key.cmp(&items[mid]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
