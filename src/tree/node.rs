//! Arena node records and borrowed node handles
//!
//! Child links are the owning edges: every node sits in exactly one
//! child slot (or is the root). The parent link is an observer index
//! back into the same arena.

use std::fmt;

use super::Tree;

/// Index of a node inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena slot
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node record stored in the arena
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn leaf(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Read-only handle to one node of a [`Tree`]
///
/// Handles borrow the tree, so they can never outlive a rebalance or flip.
/// Keep the [`NodeId`] instead when a node must be named across mutations.
pub struct NodeRef<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a Tree<K>, id: NodeId) -> Self {
        debug_assert!(id.0 < tree.nodes.len(), "handle to node outside the arena");
        Self { tree, id }
    }

    fn record(&self) -> &'a Node<K> {
        &self.tree.nodes[self.id.0]
    }

    /// Arena id of this node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Key held by this node
    pub fn key(&self) -> &'a K {
        &self.record().key
    }

    /// Node that owns this one, `None` for the root
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.record().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// Left child
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.record().left.map(|id| NodeRef::new(self.tree, id))
    }

    /// Right child
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.record().right.map(|id| NodeRef::new(self.tree, id))
    }

    /// True when the node has no children
    pub fn is_leaf(&self) -> bool {
        self.record().is_leaf()
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.record();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &node.key)
            .field("left", &node.left)
            .field("right", &node.right)
            .field("parent", &node.parent)
            .finish()
    }
}

/// `Node:<key><<parent key>>`, or `Node:<key><>` for the root
impl<K: fmt::Display> fmt::Display for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node:{}", self.key())?;
        match self.parent() {
            Some(parent) => write!(f, "<{}>", parent.key()),
            None => f.write_str("<>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_parent() {
        let tree = Tree::from_vec(vec![5, 3], "t");
        let root = tree.root().unwrap();
        assert_eq!(root.to_string(), "Node:5<>");

        let child = root.left().unwrap();
        assert_eq!(child.to_string(), "Node:3<5>");
    }

    #[test]
    fn test_handle_navigation() {
        let tree = Tree::from_vec(vec![5, 3, 8], "t");
        let root = tree.root().unwrap();

        assert!(!root.is_leaf());
        assert_eq!(*root.right().unwrap().key(), 8);
        assert_eq!(root.right().unwrap().parent(), Some(root));
        assert!(root.left().unwrap().is_leaf());
    }
}
