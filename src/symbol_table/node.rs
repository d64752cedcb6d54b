//! BST node definitions

/// Optional owned child slot
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single tree node
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,

    /// Number of nodes in the subtree rooted here (including this one)
    pub(crate) count: usize,

    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Create a detached leaf
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            count: 1,
            left: None,
            right: None,
        })
    }

    /// Recompute `count` from the children
    #[inline]
    pub(crate) fn update_count(&mut self) {
        self.count = 1 + count(&self.left) + count(&self.right);
    }
}

/// Subtree size of a link, 0 for an empty slot
#[inline]
pub(crate) fn count<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.count)
}
