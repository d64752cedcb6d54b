//! Symbol Table Module
//!
//! Ordered key-value map backed by an unbalanced binary search tree.
//!
//! ## Responsibilities
//! - Point lookup, insert and overwrite
//! - Min/max, floor/ceiling, rank/select
//! - Ranged key enumeration in ascending order
//! - Hibbard deletion of a single key, the minimum or the maximum
//!
//! ## Data Structure Choice
//! Plain BST with a subtree size on every node:
//! - Children are `Option<Box<Node>>` (strict parent → child ownership)
//! - No rebalancing: sorted inserts degrade the tree to a list
//! - Mutations recurse, so stack depth follows tree height
//!
//! ## Example shape
//! ```text
//!                          27
//!                     ┌─────┴─────┐
//!                    13          29
//!              ┌──────┴──────┐  ┌─┴─┐
//!              8             23 28  30
//!           ┌──┴──┐
//!           4     11
//! ```

mod node;
mod tree;

pub use tree::{BinarySearchTree, Iter};
