//! Heap sort

use crate::primitives::swap;

/// Heap sort
///
/// Builds a max-heap bottom-up, then repeatedly moves the maximum to the end
/// of the unsorted prefix. Heap positions are 1-based; position `p` is
/// `items[p - 1]`.
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    let mut n = items.len();
    for k in (1..=n / 2).rev() {
        sink(items, k, n);
    }
    while n > 1 {
        swap(items, 0, n - 1);
        n -= 1;
        sink(items, 1, n);
    }
}

fn sink<T: Ord>(items: &mut [T], mut k: usize, n: usize) {
    while 2 * k <= n {
        let mut j = 2 * k;
        if j < n && items[j - 1] < items[j] {
            j += 1;
        }
        if items[k - 1] >= items[j - 1] {
            break;
        }
        swap(items, k - 1, j - 1);
        k = j;
    }
}
