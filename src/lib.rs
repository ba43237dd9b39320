//! This crate exposes a plain, unbalanced Binary Search Tree (BST) along with an interactive
//! shell for poking at one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`OrderedTree`] never rebalances, so adding keys in sorted order builds a chain and every
//! operation becomes `O(N)`. It also doesn't reject duplicate keys: a key equal to one already
//! in the tree is sent left, and [`OrderedTree::is_valid`] reports a tree where a left child
//! equals its parent as invalid.
//!
//! ## Deleting a node with two children
//!
//! The node keeps its place in the tree and takes the key of its in-order successor, which is
//! unlinked instead. When the successor isn't the node's direct right child, the tree's
//! [`SuccessorSplice`] decides what happens to the successor's right subtree. The default,
//! [`SuccessorSplice::Detach`], drops it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod print;
#[cfg(feature = "shell")]
pub mod shell;
pub mod tree;


pub use tree::{Link, Node, OrderedTree, SuccessorSplice};
