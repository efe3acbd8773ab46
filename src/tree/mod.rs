//! Labeled binary search tree
//!
//! Nodes live in an arena owned by the tree. Child links are the owning
//! edges, parent links are plain indices back into the arena, and every
//! mutation rewrites both sides of a link together.
//!
//! Insertion is plain unbalanced BST insertion: keys strictly less than a
//! node go left, everything else (including equal keys) goes right.

mod node;
mod render;
mod transform;
mod traversal;

pub use node::{NodeId, NodeRef};
pub use traversal::InOrder;

use node::Node;
use tracing::trace;

use crate::TreeError;

/// Binary search tree with a display label
#[derive(Debug, Clone)]
pub struct Tree<K> {
    /// Node arena; every slot is reachable from `root`
    nodes: Vec<Node<K>>,

    /// Root node, `None` for an empty tree
    root: Option<NodeId>,

    /// Display label, fixed at construction
    label: String,
}

impl<K> Tree<K> {
    /// Create an empty tree
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            label: label.into(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree has no root
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node handle
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Handle for `id`, failing if `id` does not address a node of this tree
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_, K>, TreeError> {
        self.check(id)?;
        Ok(NodeRef::new(self, id))
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownNode {
                id,
                len: self.nodes.len(),
            })
        }
    }

    #[inline]
    fn key_of(&self, id: NodeId) -> &K {
        &self.nodes[id.0].key
    }
}

impl<K: Ord> Tree<K> {
    /// Build a tree by inserting `keys` in sequence order
    pub fn from_vec(keys: Vec<K>, label: impl Into<String>) -> Self {
        Self::from_keys(label, keys)
    }

    /// Build a tree by inserting every key yielded by `keys`
    pub fn from_keys<I>(label: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new(label);
        tree.extend(keys);
        tree
    }

    /// Insert `key` as a new leaf and return its id
    ///
    /// Ties descend right, so duplicates collect in the right subtree of
    /// their equal ancestor. No rebalancing happens here.
    pub fn insert(&mut self, key: K) -> NodeId {
        let id = NodeId(self.nodes.len());

        let Some(mut current) = self.root else {
            self.nodes.push(Node::leaf(key, None));
            self.root = Some(id);
            trace!(node = %id, "inserted root");
            return id;
        };

        loop {
            let node = &self.nodes[current.0];
            let slot = if key < node.key { node.left } else { node.right };
            match slot {
                Some(next) => current = next,
                None => break,
            }
        }

        let go_left = key < self.nodes[current.0].key;
        self.nodes.push(Node::leaf(key, Some(current)));
        let parent = &mut self.nodes[current.0];
        if go_left {
            parent.left = Some(id);
        } else {
            parent.right = Some(id);
        }
        trace!(node = %id, parent = %current, left = go_left, "inserted leaf");
        id
    }

    /// First node on the search path whose key equals `key`
    pub fn get_by_key(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.find(key).map(|id| NodeRef::new(self, id))
    }

    /// True when some node on the search path holds `key`
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: &K) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            cursor = match key.cmp(&node.key) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }
}

impl<K: Ord + Clone> Tree<K> {
    /// Build a tree by inserting clones of `keys` in iteration order
    pub fn from_slice(keys: &[K], label: impl Into<String>) -> Self {
        Self::from_keys(label, keys.iter().cloned())
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}
