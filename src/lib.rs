//! # Labeled binary search tree
//!
//! A generic, unbalanced binary search tree whose nodes carry parent
//! back-references, together with the structural queries and transforms
//! that use them.
//!
//! ## Operations
//!
//! 1. **Insertion / lookup**: ties route right, so duplicates collect in the
//!    right subtree of their equal ancestor
//! 2. **Queries**: per-level node counts, root-to-leaf paths, count of
//!    subtrees that are themselves ordered
//! 3. **Transforms**: mirror flip, full rebalance by midpoint recursion,
//!    in-order successor via parent links
//! 4. **Rendering**: vertical view (`Display`) and single-line in-order view
//!
//! ## Usage Example
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_vec(vec![5, 3, 8, 1, 4], "demo");
//! assert_eq!(tree.in_order_string(), "demo: 1 3 4 5 8 ");
//! assert_eq!(tree.nodes_in_level(1), 2);
//!
//! let three = tree.get_by_key(&3).unwrap().id();
//! assert_eq!(tree.in_order_successor(three)?.map(|n| *n.key()), Some(4));
//!
//! tree.balance_tree();
//! assert_eq!(tree.height(), 3);
//! # Ok::<(), bstree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod stats; // Structural summary
pub mod tree; // Arena tree, queries, transforms, rendering

// Re-exports for convenience
pub use stats::TreeStats;
pub use tree::{InOrder, NodeId, NodeRef, Tree};

use thiserror::Error;

/// Errors reported by tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Node id does not address a node of this tree
    #[error("node {id} is not part of this tree ({len} nodes)")]
    UnknownNode {
        /// Id that was requested
        id: NodeId,
        /// Number of nodes in the tree
        len: usize,
    },
}
