//! Priority Queue Module
//!
//! Fixed-capacity maximum priority queue on a binary heap.
//!
//! ## Responsibilities
//! - O(log n) insert and retrieve-max
//! - Reject inserts past the configured capacity (a logical bound; storage
//!   is allocated as elements arrive)
//!
//! ## Layout
//! Heap positions are 1-based (parent of `p` is `p / 2`, children `2p` and
//! `2p + 1`); position `p` lives in slot `p - 1` of the backing vector.
//! ```text
//! position:   1    2    3    4    5
//!          ┌────┬────┬────┬────┬────┐
//!          │ 9  │ 7  │ 8  │ 1  │ 5  │
//!          └────┴────┴────┴────┴────┘
//! ```

mod max_pq;

pub use max_pq::MaxPriorityQueue;
