//! An interactive Binary Search Tree (BST) of `i32` keys. The user builds a
//! tree from the console, adds and removes keys through a numbered menu, and
//! looks at the result as a traversal or as an indented drawing.
//!
//! ## Ordering
//!
//! Every key in a node's left subtree is smaller than the node's own key and
//! every key in its right subtree is larger. Typing a key that is already in
//! the tree is accepted but changes nothing, so keys stay unique. Lookups,
//! inserts and deletes cost one step per level.
//!
//! Nothing rebalances the tree. Feeding it `1, 2, 3, ...` grows a single
//! right-leaning chain, which is handy for seeing what the displays do with
//! a degenerate shape.
//!
//! ## Deleting
//!
//! A key with at most one child is spliced out and its child takes its
//! place. A key with two children is overwritten by its in-order successor
//! (the smallest key to its right), and the successor's old node is spliced
//! out instead.
//!
//! ## Traversals
//!
//! In-order visits left, node, right and so prints the keys sorted.
//! Pre-order prints a node before its subtrees and post-order after them.
//!
//! ## Layout
//!
//! - [`tree`] holds the BST itself.
//! - [`render`] turns a tree into text.
//! - [`session`] runs the console menu over any reader and writer.
//! - [`config`] parses the command line.

#![deny(missing_docs)]

pub mod config;
mod error;
pub mod render;
pub mod session;
pub mod tree;
mod util;


pub use error::Error;
pub use util::Traversal;
