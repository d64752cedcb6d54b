//! Quadratic sorts: selection, insertion and shell

use crate::primitives::swap;

/// Selection sort
///
/// Repeatedly swaps the smallest remaining element into place. Always n²/2
/// comparisons, at most n swaps.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if items[j] < items[min] {
                min = j;
            }
        }
        swap(items, i, min);
    }
}

/// Insertion sort (stable)
///
/// Linear on already-sorted input.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j] < items[j - 1] {
            swap(items, j, j - 1);
            j -= 1;
        }
    }
}

/// Shell sort with the 3h+1 gap sequence (1, 4, 13, 40, ...)
pub fn shell_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    let mut h = 1;
    while h < n / 3 {
        h = 3 * h + 1;
    }

    while h >= 1 {
        // h-sort the slice
        for i in h..n {
            let mut j = i;
            while j >= h && items[j] < items[j - h] {
                swap(items, j, j - h);
                j -= h;
            }
        }
        h /= 3;
    }
}
