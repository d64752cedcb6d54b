//! Primitives
//!
//! Small slice helpers shared by the priority queue and the sort routines.

/// Exchange the elements at positions `i` and `j`.
///
/// Both indices must be in bounds; an out-of-range index panics exactly like
/// slice indexing does. `i == j` is allowed and leaves the slice unchanged.
#[inline]
pub fn swap<T>(items: &mut [T], i: usize, j: usize) {
    items.swap(i, j);
}

/// Returns `true` if `items` is in ascending (non-decreasing) order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}
