//! Top-down merge sort

/// Merge sort (stable)
///
/// Allocates one auxiliary buffer the size of the input and reuses it for
/// every merge.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mut aux = items.to_vec();
    let hi = items.len() - 1;
    sort(items, &mut aux, 0, hi);
}

fn sort<T: Ord + Clone>(items: &mut [T], aux: &mut [T], lo: usize, hi: usize) {
    if hi <= lo {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort(items, aux, lo, mid);
    sort(items, aux, mid + 1, hi);
    merge(items, aux, lo, mid, hi);
}

/// Merge the sorted runs `items[lo..=mid]` and `items[mid + 1..=hi]`
fn merge<T: Ord + Clone>(items: &mut [T], aux: &mut [T], lo: usize, mid: usize, hi: usize) {
    aux[lo..=hi].clone_from_slice(&items[lo..=hi]);

    let mut i = lo;
    let mut j = mid + 1;
    for k in lo..=hi {
        // Take from the left run on ties to stay stable
        if i > mid {
            items[k] = aux[j].clone();
            j += 1;
        } else if j > hi || aux[i] <= aux[j] {
            items[k] = aux[i].clone();
            i += 1;
        } else {
            items[k] = aux[j].clone();
            j += 1;
        }
    }
}
