//! Maximum priority queue implementation

use std::fmt;

use crate::error::{AlgoError, Result};
use crate::primitives::swap;

/// Bounded max-heap
///
/// Holds at most `capacity` elements. The capacity is a logical limit: the
/// backing storage grows on demand and is never reserved up front.
pub struct MaxPriorityQueue<T> {
    /// Heap slots, position `p` stored at index `p - 1`
    items: Vec<T>,

    /// Maximum number of elements
    capacity: usize,
}

impl<T: Ord> MaxPriorityQueue<T> {
    /// Create an empty queue that accepts up to `max_size` elements
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: max_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current number of elements
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Largest element without removing it
    pub fn peek_max(&self) -> Option<&T> {
        self.items.first()
    }

    /// Add `value` to the queue
    ///
    /// Fails with [`AlgoError::CapacityExceeded`] when the queue already
    /// holds `capacity` elements; the queue is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            tracing::debug!("Rejecting insert: queue full at capacity {}", self.capacity);
            return Err(AlgoError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.items.push(value);
        self.swim(self.items.len());
        Ok(())
    }

    /// Remove and return the largest element
    ///
    /// Fails with [`AlgoError::EmptyQueue`] if there is nothing to remove.
    pub fn retrieve_max(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(AlgoError::EmptyQueue);
        }

        // Last element moves into the root slot
        let max = self.items.swap_remove(0);
        self.sink(1);
        Ok(max)
    }

    // =========================================================================
    // Heap Repair (1-based positions)
    // =========================================================================

    /// Move the element at `position` up while it beats its parent
    fn swim(&mut self, mut position: usize) {
        while position > 1 && self.less(position / 2, position) {
            self.exchange(position / 2, position);
            position /= 2;
        }
    }

    /// Move the element at `position` down below any larger child
    fn sink(&mut self, mut position: usize) {
        let n = self.items.len();
        while 2 * position <= n {
            let mut child = 2 * position;
            if child < n && self.less(child, child + 1) {
                child += 1;
            }
            if !self.less(position, child) {
                break;
            }
            self.exchange(position, child);
            position = child;
        }
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.items[i - 1] < self.items[j - 1]
    }

    #[inline]
    fn exchange(&mut self, i: usize, j: usize) {
        swap(&mut self.items, i - 1, j - 1);
    }
}

impl<T: fmt::Debug> fmt::Debug for MaxPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxPriorityQueue")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("max", &self.items.first())
            .finish()
    }
}
