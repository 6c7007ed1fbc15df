//! This crate exposes a plain (unbalanced) Binary Search Tree (BST) that
//! stores a single ordered element type and answers ordered queries over it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one value and sometimes
//! has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree never stores a value twice: inserting a value that is already
//! present is a no-op, so the first insert wins. Because a valid BST reads
//! out as sorted output under an in-order walk (left subtree, node, right
//! subtree), the tree naturally supports sorted iteration, a generic
//! in-order visitor, and aggregate queries built on top of the walk such as
//! [`Tree::sum_leaves`].
//!
//! No rebalancing is performed. Searching and inserting take `O(height)`,
//! and the height is determined entirely by insertion order: inserting
//! already-sorted input degrades the tree toward a linked list.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let tree = Tree::build(&[4, 2, 6, 3, 1, 5, 7], 7)?;
//!
//! let in_order: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(in_order, [1, 2, 3, 4, 5, 6, 7]);
//!
//! // The nodes 1, 3, 5, and 7 have no children.
//! assert_eq!(tree.sum_leaves(), 16);
//! # Ok::<(), ordtree::BuildError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod build;
pub mod tree;

pub use crate::build::BuildError;
pub use crate::tree::{Iter, Node, Tree};
