//! Randomized quick sort

use rand::seq::SliceRandom;
use rand::Rng;

use crate::primitives::swap;

/// Quick sort, shuffling with the thread-local RNG first
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    quick_sort_with_rng(items, &mut rand::thread_rng());
}

/// Quick sort with a caller-supplied RNG for the initial shuffle
///
/// The shuffle guards against the quadratic worst case on sorted or
/// adversarial input.
pub fn quick_sort_with_rng<T: Ord, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
    sort(items);
}

fn sort<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let pivot = partition(items);
    let (left, right) = items.split_at_mut(pivot);
    sort(left);
    sort(&mut right[1..]);
}

/// Partition around `items[0]` and return the pivot's final position
///
/// Afterwards everything left of the pivot is `<=` it and everything right
/// of it is `>=` it. Requires `items.len() >= 2`.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let end = items.len() - 1;
    let mut i = 0;
    let mut j = end + 1;

    loop {
        loop {
            i += 1;
            if items[i] >= items[0] || i == end {
                break;
            }
        }
        loop {
            j -= 1;
            if items[0] >= items[j] || j == 0 {
                break;
            }
        }
        if i >= j {
            break;
        }
        swap(items, i, j);
    }

    swap(items, 0, j);
    j
}
