//! Structural transforms and successor search
//!
//! Rebalancing reuses the existing arena slots and rewires them via
//! midpoint recursion over the in-order sequence:
//!   range [min, max) -> root at min + (max - min) / 2
//!   left subtree:  [min, mid)
//!   right subtree: [mid + 1, max)

use tracing::debug;

use super::{NodeId, NodeRef, Tree};
use crate::TreeError;

impl<K> Tree<K> {
    /// Mirror the tree by swapping every node's children
    ///
    /// Parent links are untouched. Calling this twice restores the
    /// original shape.
    pub fn flip(&mut self) {
        // no deletion, so every arena slot is part of the tree
        for node in &mut self.nodes {
            std::mem::swap(&mut node.left, &mut node.right);
        }
        debug!(label = %self.label, nodes = self.nodes.len(), "flipped tree");
    }

    /// Rebuild the tree with minimal height, keeping its in-order sequence
    pub fn balance_tree(&mut self) {
        if self.root.is_none() {
            return;
        }
        let before = self.height();
        let order = self.in_order_ids();
        self.root = self.attach_range(&order, None);
        debug!(
            label = %self.label,
            nodes = order.len(),
            height_before = before,
            height_after = self.height(),
            "rebalanced tree"
        );
    }

    /// Hang the midpoint of `order` under `parent` and recurse on both halves
    ///
    /// Depth is bounded by log2 of the slice length.
    fn attach_range(&mut self, order: &[NodeId], parent: Option<NodeId>) -> Option<NodeId> {
        if order.is_empty() {
            return None;
        }
        let mid = order.len() / 2;
        let id = order[mid];
        self.nodes[id.0].parent = parent;

        let left = self.attach_range(&order[..mid], Some(id));
        let right = self.attach_range(&order[mid + 1..], Some(id));

        let node = &mut self.nodes[id.0];
        node.left = left;
        node.right = right;
        Some(id)
    }
}

impl<K: Ord> Tree<K> {
    /// Node holding the smallest key strictly greater than the key at `id`
    ///
    /// Returns `Ok(None)` when `id` holds the largest key. Fails if `id` does
    /// not address a node of this tree.
    pub fn in_order_successor(&self, id: NodeId) -> Result<Option<NodeRef<'_, K>>, TreeError> {
        self.check(id)?;
        Ok(self.successor_by_key(self.key_of(id)))
    }

    /// Successor search for a bare key, present in the tree or not
    ///
    /// Descends from the root (right on `key >= current`, left otherwise),
    /// then climbs parent links from the last visited node until a key
    /// strictly greater than `key` turns up.
    pub fn successor_by_key(&self, key: &K) -> Option<NodeRef<'_, K>> {
        let mut last = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            last = Some(id);
            let node = &self.nodes[id.0];
            cursor = if *key >= node.key { node.right } else { node.left };
        }

        let mut up = last;
        while let Some(id) = up {
            let node = &self.nodes[id.0];
            if node.key > *key {
                return Some(NodeRef::new(self, id));
            }
            up = node.parent;
        }
        None
    }
}
