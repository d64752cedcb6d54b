//! Sorting Module
//!
//! Comparison sorts over mutable slices, all ascending and in place.
//!
//! | Algorithm | Worst      | Best        | Extra space | Stable |
//! |-----------|------------|-------------|-------------|--------|
//! | selection | n²         | n²          | 1           | no     |
//! | insertion | n²         | n           | 1           | yes    |
//! | shell     | n²         | n log² n    | 1           | no     |
//! | merge     | n log n    | n log n     | n           | yes    |
//! | quick     | n² (*)     | n log n     | log n       | no     |
//! | heap      | n log n    | n log n     | 1           | no     |
//!
//! (*) the input is shuffled first, which makes the quadratic case
//! vanishingly unlikely.

mod elementary;
mod heap;
mod merge;
mod quick;

pub use elementary::{insertion_sort, selection_sort, shell_sort};
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::{quick_sort, quick_sort_with_rng};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

/// Selectable sort routine
///
/// Deserialization goes through `FromStr`, so config files accept the same
/// spellings as the command line (surrounding whitespace and case ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortAlgorithm {
    Selection,
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in table order
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Lowercase name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
        }
    }

    /// Whether equal elements keep their relative order
    pub fn is_stable(&self) -> bool {
        matches!(self, SortAlgorithm::Insertion | SortAlgorithm::Merge)
    }

    /// Sort `items` ascending with this algorithm
    pub fn sort<T: Ord + Clone>(&self, items: &mut [T]) {
        tracing::debug!("Sorting {} items with {} sort", items.len(), self.name());
        match self {
            SortAlgorithm::Selection => selection_sort(items),
            SortAlgorithm::Insertion => insertion_sort(items),
            SortAlgorithm::Shell => shell_sort(items),
            SortAlgorithm::Merge => merge_sort(items),
            SortAlgorithm::Quick => quick_sort(items),
            SortAlgorithm::Heap => heap_sort(items),
        }
        tracing::debug!("Finished {} sort of {} items", self.name(), items.len());
    }
}

impl Default for SortAlgorithm {
    fn default() -> Self {
        SortAlgorithm::Merge
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| AlgoError::InvalidAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for SortAlgorithm {
    type Error = AlgoError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
