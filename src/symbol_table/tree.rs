//! Binary search tree implementation
//!
//! Mutations recurse over owned links and rebuild the path on the way back
//! up, recomputing subtree counts. Read-only descents are plain loops.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use super::node::{count, Link, Node};

/// Ordered symbol table backed by an unbalanced BST
pub struct BinarySearchTree<K, V> {
    root: Link<K, V>,
}

impl<K, V> BinarySearchTree<K, V> {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Number of key-value pairs in the tree
    pub fn size(&self) -> usize {
        count(&self.root)
    }

    /// Alias for [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Length of the longest root-to-leaf path, in edges
    ///
    /// 0 for an empty tree and for a single node. Inserting keys in sorted
    /// order yields `size() - 1`.
    pub fn height(&self) -> usize {
        depth(&self.root).saturating_sub(1)
    }

    /// Remove every entry
    ///
    /// Tears the tree down with an explicit stack so that degenerate
    /// (list-shaped) trees do not overflow on drop.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// In-order iterator over `(&key, &value)` pairs
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }
}

impl<K: Ord, V> BinarySearchTree<K, V> {
    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Smallest key, `None` if empty
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Largest key, `None` if empty
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Largest key less than or equal to `key`
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    best = Some(&node.key);
                    current = node.right.as_deref();
                }
            }
        }
        best
    }

    /// Smallest key greater than or equal to `key`
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Less => {
                    best = Some(&node.key);
                    current = node.left.as_deref();
                }
            }
        }
        best
    }

    /// Number of keys strictly less than `key`
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut rank = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + count(&node.left);
                    current = node.right.as_deref();
                }
                Ordering::Equal => return rank + count(&node.left),
            }
        }
        rank
    }

    /// Key with exactly `rank` smaller keys, `None` if `rank >= size()`
    pub fn select(&self, mut rank: usize) -> Option<&K> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let left = count(&node.left);
            match rank.cmp(&left) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    rank -= left + 1;
                    current = node.right.as_deref();
                }
                Ordering::Equal => return Some(&node.key),
            }
        }
        None
    }

    /// Number of keys in `[start, end]`, 0 if `start > end`
    pub fn size_in_range<Q>(&self, start: &Q, end: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if start > end {
            return 0;
        }
        let below_end = self.rank(end) - self.rank(start);
        if self.contains(end) {
            below_end + 1
        } else {
            below_end
        }
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// All keys in ascending order
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => self.keys_in_range(min, max),
            _ => Vec::new(),
        }
    }

    /// Keys in `[start, end]` in ascending order
    ///
    /// The result is a snapshot; later mutations do not affect it. An
    /// inverted range yields an empty vector.
    pub fn keys_in_range<Q>(&self, start: &Q, end: &Q) -> Vec<K>
    where
        K: Borrow<Q> + Clone,
        Q: Ord + ?Sized,
    {
        let mut keys = Vec::new();
        if start <= end {
            collect_range(&self.root, start, end, &mut keys);
        }
        keys
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert `key` or overwrite its value
    ///
    /// Returns the previous value when the key was already present; the tree
    /// shape is unchanged in that case.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let (root, previous) = put_node(self.root.take(), key, value);
        self.root = Some(root);
        previous
    }

    /// Remove `key` and return its value
    ///
    /// Deleting an absent key leaves the tree untouched and returns `None`.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = delete_node(self.root.take(), key);
        self.root = root;
        if removed.is_none() {
            tracing::trace!("delete: key not present, tree unchanged");
        }
        removed
    }

    /// Remove the smallest entry
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (rest, min) = take_min(root);
        self.root = rest;
        let Node { key, value, .. } = *min;
        Some((key, value))
    }

    /// Remove the largest entry
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (rest, max) = take_max(root);
        self.root = rest;
        let Node { key, value, .. } = *max;
        Some((key, value))
    }
}

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for BinarySearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinarySearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a BinarySearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// In-order iterator over a [`BinarySearchTree`]
///
/// Holds the left spine of the unvisited part of the tree on an explicit
/// stack.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: &'a Link<K, V>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: count(root),
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

// =============================================================================
// Recursive Helpers
// =============================================================================

fn put_node<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
    let mut node = match link {
        None => return (Node::leaf(key, value), None),
        Some(node) => node,
    };

    let previous = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, previous) = put_node(node.left.take(), key, value);
            node.left = Some(child);
            previous
        }
        Ordering::Greater => {
            let (child, previous) = put_node(node.right.take(), key, value);
            node.right = Some(child);
            previous
        }
        Ordering::Equal => Some(std::mem::replace(&mut node.value, value)),
    };

    node.update_count();
    (node, previous)
}

fn delete_node<K, V, Q>(link: Link<K, V>, key: &Q) -> (Link<K, V>, Option<V>)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, removed) = delete_node(node.left.take(), key);
            node.left = left;
            node.update_count();
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = delete_node(node.right.take(), key);
            node.right = right;
            node.update_count();
            (Some(node), removed)
        }
        Ordering::Equal => {
            let Node {
                value, left, right, ..
            } = *node;
            (splice(left, right), Some(value))
        }
    }
}

/// Join the two subtrees of a removed node (Hibbard deletion)
///
/// With both children present, the minimum of the right subtree is unlinked
/// and becomes the new subtree root.
fn splice<K, V>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    match (left, right) {
        (left, None) => left,
        (None, right) => right,
        (Some(left), Some(right)) => {
            let (rest, mut successor) = take_min(right);
            successor.right = rest;
            successor.left = Some(left);
            successor.update_count();
            Some(successor)
        }
    }
}

/// Unlink the minimum node of a subtree
///
/// Returns the remaining subtree and the detached node. The detached node has
/// no children; its `count` is stale until it is relinked.
fn take_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            node.update_count();
            (Some(node), min)
        }
    }
}

/// Mirror of [`take_min`]
fn take_max<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.right.take() {
        None => {
            let rest = node.left.take();
            (rest, node)
        }
        Some(right) => {
            let (rest, max) = take_max(right);
            node.right = rest;
            node.update_count();
            (Some(node), max)
        }
    }
}

fn collect_range<K, V, Q>(link: &Link<K, V>, start: &Q, end: &Q, keys: &mut Vec<K>)
where
    K: Borrow<Q> + Clone,
    Q: Ord + ?Sized,
{
    let Some(node) = link else {
        return;
    };
    let key = node.key.borrow();

    if start < key {
        collect_range(&node.left, start, end, keys);
    }
    if start <= key && key <= end {
        keys.push(node.key.clone());
    }
    if end > key {
        collect_range(&node.right, start, end, keys);
    }
}

/// Number of nodes on the longest downward path
fn depth<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
    }
}
