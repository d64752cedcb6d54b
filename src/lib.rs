//! # algokit
//!
//! Classic in-memory algorithms and data structures:
//! - Ordered symbol table on an unbalanced binary search tree
//! - Fixed-capacity maximum priority queue on a binary heap
//! - Comparison sorts (selection, insertion, shell, merge, quick, heap)
//! - Binary search
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   algokit-demo (binary)                      │
//! │                Config → scenario driver                      │
//! └───────┬───────────────┬────────────────┬────────────────────┘
//!         │               │                │
//!         ▼               ▼                ▼
//!  ┌─────────────┐ ┌──────────────┐ ┌──────────────────────┐
//!  │ SymbolTable │ │ PriorityQueue│ │ Sorting / Searching  │
//!  │    (BST)    │ │  (max-heap)  │ │   (slice routines)   │
//!  └─────────────┘ └──────┬───────┘ └──────────┬───────────┘
//!                         │                    │
//!                         └─────────┬──────────┘
//!                                   ▼
//!                           ┌─────────────┐
//!                           │ Primitives  │
//!                           │   (swap)    │
//!                           └─────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous; callers serialize access
//! to a given tree or queue.
//!
//! ## Example
//!
//! ```
//! use algokit::{BinarySearchTree, MaxPriorityQueue};
//!
//! let mut table = BinarySearchTree::new();
//! table.put(3, "three");
//! table.put(1, "one");
//! assert_eq!(table.keys(), vec![1, 3]);
//!
//! let mut pq = MaxPriorityQueue::new(4);
//! pq.insert(5).unwrap();
//! pq.insert(8).unwrap();
//! assert_eq!(pq.retrieve_max().unwrap(), 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod primitives;
pub mod symbol_table;
pub mod priority_queue;
pub mod sorting;
pub mod searching;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AlgoError, Result};
pub use config::Config;
pub use symbol_table::BinarySearchTree;
pub use priority_queue::MaxPriorityQueue;
pub use sorting::SortAlgorithm;
pub use searching::binary_search;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of algokit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
