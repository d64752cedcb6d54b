//! Sorting Tests
//!
//! Tests verify:
//! - Every algorithm sorts edge-case inputs
//! - Stability of insertion and merge sort
//! - Deterministic quick sort with a seeded RNG
//! - SortAlgorithm parsing and display
//! - Start and finish of a sort run are logged
//! - Agreement with slice::sort on arbitrary input

use std::io;
use std::sync::{Arc, Mutex};

use algokit::primitives::is_sorted;
use algokit::sorting::{
    heap_sort, insertion_sort, merge_sort, quick_sort_with_rng, selection_sort, shell_sort,
    SortAlgorithm,
};
use algokit::AlgoError;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// Helper Functions
// =============================================================================

/// Sorts `input` with every algorithm and checks against `slice::sort`
fn assert_all_sort(input: &[i32]) {
    let mut expected = input.to_vec();
    expected.sort();

    for algorithm in SortAlgorithm::ALL {
        let mut items = input.to_vec();
        algorithm.sort(&mut items);
        assert_eq!(items, expected, "{} sort failed on {:?}", algorithm, input);
    }
}

/// Element ordered by `key` only; `tag` records the original position
#[derive(Debug, Clone)]
struct Tagged {
    key: u8,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(keys: &[u8]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

fn is_stable_result(items: &[Tagged]) -> bool {
    items
        .windows(2)
        .all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag))
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[test]
fn test_empty_and_single() {
    assert_all_sort(&[]);
    assert_all_sort(&[42]);
}

#[test]
fn test_two_elements() {
    assert_all_sort(&[2, 1]);
    assert_all_sort(&[1, 2]);
}

#[test]
fn test_already_sorted_and_reversed() {
    let ascending: Vec<i32> = (0..100).collect();
    let descending: Vec<i32> = (0..100).rev().collect();
    assert_all_sort(&ascending);
    assert_all_sort(&descending);
}

#[test]
fn test_all_equal() {
    assert_all_sort(&[7; 50]);
}

#[test]
fn test_with_duplicates_and_negatives() {
    assert_all_sort(&[3, -1, 4, 1, -5, 9, 2, 6, 5, 3, 5, -1, 0]);
}

#[test]
fn test_free_functions_directly() {
    let input = vec![5, 2, 9, 1, 5, 6];
    let sorted = vec![1, 2, 5, 5, 6, 9];

    let mut items = input.clone();
    selection_sort(&mut items);
    assert_eq!(items, sorted);

    let mut items = input.clone();
    insertion_sort(&mut items);
    assert_eq!(items, sorted);

    let mut items = input.clone();
    shell_sort(&mut items);
    assert_eq!(items, sorted);

    let mut items = input.clone();
    merge_sort(&mut items);
    assert_eq!(items, sorted);

    let mut items = input.clone();
    heap_sort(&mut items);
    assert_eq!(items, sorted);
}

#[test]
fn test_sorts_strings() {
    let mut words = vec!["pear", "apple", "fig", "banana"];
    heap_sort(&mut words);
    assert_eq!(words, vec!["apple", "banana", "fig", "pear"]);
}

// =============================================================================
// Stability Tests
// =============================================================================

#[test]
fn test_insertion_sort_is_stable() {
    let mut items = tagged(&[3, 1, 3, 2, 1, 3, 2]);
    insertion_sort(&mut items);
    assert!(is_stable_result(&items));
}

#[test]
fn test_merge_sort_is_stable() {
    let mut items = tagged(&[3, 1, 3, 2, 1, 3, 2, 1, 1, 2]);
    merge_sort(&mut items);
    assert!(is_stable_result(&items));
}

#[test]
fn test_is_stable_flag() {
    let stable: Vec<SortAlgorithm> = SortAlgorithm::ALL
        .into_iter()
        .filter(|a| a.is_stable())
        .collect();
    assert_eq!(stable, vec![SortAlgorithm::Insertion, SortAlgorithm::Merge]);
}

// =============================================================================
// Quick Sort Tests
// =============================================================================

#[test]
fn test_quick_sort_with_seeded_rng() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut items: Vec<i32> = (0..500).rev().collect();
    quick_sort_with_rng(&mut items, &mut rng);
    assert!(is_sorted(&items));
    assert_eq!(items.len(), 500);
}

// =============================================================================
// SortAlgorithm Tests
// =============================================================================

#[test]
fn test_parse_algorithm_names() {
    for algorithm in SortAlgorithm::ALL {
        let parsed: SortAlgorithm = algorithm.name().parse().unwrap();
        assert_eq!(parsed, algorithm);
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
    assert_eq!(" Quick ".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
}

#[test]
fn test_parse_unknown_algorithm() {
    let result = "bogo".parse::<SortAlgorithm>();
    assert!(matches!(result, Err(AlgoError::InvalidAlgorithm(name)) if name == "bogo"));
}

#[test]
fn test_default_algorithm() {
    assert_eq!(SortAlgorithm::default(), SortAlgorithm::Merge);
}

// =============================================================================
// Logging Tests
// =============================================================================

/// In-memory log sink shared with the subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sort_run_logs_start_and_finish() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut items = vec![4, 1, 3, 5, 2];
        SortAlgorithm::Heap.sort(&mut items);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    });

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    let start = output.find("Sorting 5 items with heap sort").unwrap();
    let finish = output.find("Finished heap sort of 5 items").unwrap();
    assert!(start < finish, "unexpected log order:\n{}", output);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn test_every_algorithm_matches_std(input in proptest::collection::vec(any::<i32>(), 0..300)) {
        let mut expected = input.clone();
        expected.sort();

        for algorithm in SortAlgorithm::ALL {
            let mut items = input.clone();
            algorithm.sort(&mut items);
            prop_assert_eq!(&items, &expected, "{} sort", algorithm);
        }
    }

    #[test]
    fn test_stable_algorithms_preserve_order(keys in proptest::collection::vec(0u8..8, 0..100)) {
        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            let mut items = tagged(&keys);
            algorithm.sort(&mut items);
            prop_assert!(is_stable_result(&items), "{} sort not stable", algorithm);
        }
    }
}
