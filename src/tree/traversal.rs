//! Traversal-based queries
//!
//! All walks here keep an explicit stack instead of recursing, so an
//! unbalanced tree built from sorted input cannot exhaust the call stack.

use super::{NodeId, NodeRef, Tree};

/// Left-node-right iterator over a tree's nodes
pub struct InOrder<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a, K> InOrder<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root,
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.tree.nodes[id.0].left;
        }
        let id = self.stack.pop()?;
        self.cursor = self.tree.nodes[id.0].right;
        Some(NodeRef::new(self.tree, id))
    }
}

impl<K> std::fmt::Debug for InOrder<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InOrder")
            .field("stack", &self.stack)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<K> Tree<K> {
    /// Nodes in left-node-right order
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self)
    }

    /// Keys in left-node-right order
    pub fn in_order_keys(&self) -> Vec<&K> {
        self.in_order().map(|node| node.key()).collect()
    }

    pub(crate) fn in_order_ids(&self) -> Vec<NodeId> {
        self.in_order().map(|node| node.id()).collect()
    }

    /// Root-first order where each parent precedes its children
    fn pre_order_ids(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            let node = &self.nodes[id.0];
            stack.extend(node.right);
            stack.extend(node.left);
        }
        order
    }

    /// Number of levels, 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id.0];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Count of nodes whose depth equals `level` (root is level 0)
    pub fn nodes_in_level(&self, level: usize) -> usize {
        let mut count = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            if depth == level {
                count += 1;
                continue;
            }
            let node = &self.nodes[id.0];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        count
    }

    /// Key sequence from the root to every leaf, leftmost leaf first
    pub fn leaf_paths(&self) -> Vec<Vec<&K>> {
        let mut paths = Vec::new();
        let mut path: Vec<&K> = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 0)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            path.truncate(depth);
            path.push(&node.key);

            if node.is_leaf() {
                paths.push(path.clone());
                continue;
            }
            // right pushed first so the left branch is walked first
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }
        paths
    }
}

impl<K: Ord> Tree<K> {
    /// Number of nodes that root an ordered subtree
    ///
    /// A leaf always qualifies. An inner node qualifies when each present
    /// child is on the correct side of it (strictly) and each present child
    /// qualifies in turn. Every node is judged on its own, so nested
    /// qualifying subtrees all add to the count.
    pub fn count_bst(&self) -> usize {
        let mut valid = vec![false; self.nodes.len()];
        let mut count = 0;

        // children precede parents in reversed pre-order
        for id in self.pre_order_ids().into_iter().rev() {
            let node = &self.nodes[id.0];
            let left_ok = node
                .left
                .map_or(true, |l| valid[l.0] && self.nodes[l.0].key < node.key);
            let right_ok = node
                .right
                .map_or(true, |r| valid[r.0] && self.nodes[r.0].key > node.key);

            if left_ok && right_ok {
                valid[id.0] = true;
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<i32> {
        Tree::from_vec(vec![5, 3, 8, 1, 4], "sample")
    }

    #[test]
    fn test_in_order_sorted() {
        let tree = Tree::from_vec(vec![10, 4, 17, 4, 1, 12, 30, 8], "t");
        let keys: Vec<i32> = tree.in_order_keys().into_iter().copied().collect();
        assert_eq!(keys, vec![1, 4, 4, 8, 10, 12, 17, 30]);
    }

    #[test]
    fn test_levels() {
        let tree = sample();
        assert_eq!(tree.nodes_in_level(0), 1);
        assert_eq!(tree.nodes_in_level(1), 2);
        assert_eq!(tree.nodes_in_level(2), 2);
        assert_eq!(tree.nodes_in_level(3), 0);
        assert_eq!(tree.nodes_in_level(usize::MAX), 0);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_levels_empty() {
        let tree: Tree<i32> = Tree::new("e");
        assert_eq!(tree.nodes_in_level(0), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.leaf_paths().is_empty());
        assert_eq!(tree.count_bst(), 0);
    }

    #[test]
    fn test_leaf_paths_left_first() {
        let tree = sample();
        let paths: Vec<Vec<i32>> = tree
            .leaf_paths()
            .into_iter()
            .map(|p| p.into_iter().copied().collect())
            .collect();
        assert_eq!(paths, vec![vec![5, 3, 1], vec![5, 3, 4], vec![5, 8]]);
    }

    #[test]
    fn test_leaf_paths_single_node() {
        let tree = Tree::from_vec(vec![42], "one");
        assert_eq!(tree.leaf_paths(), vec![vec![&42]]);
    }

    #[test]
    fn test_count_bst_ordered_tree() {
        let tree = sample();
        assert_eq!(tree.count_bst(), 5);
    }

    #[test]
    fn test_count_bst_duplicate_breaks_parent() {
        // the second 2 hangs right of the first with an equal key
        let tree = Tree::from_vec(vec![2, 2], "dup");
        assert_eq!(tree.count_bst(), 1);
    }

    #[test]
    fn test_count_bst_checks_whole_subtree() {
        let mut tree = Tree::from_vec(vec![5, 3, 8, 1, 4], "t");
        // swap the children of 3 only: 3 fails its own ordering check and
        // the root fails because its left subtree no longer qualifies
        let three = tree.root.and_then(|r| tree.nodes[r.0].left).unwrap();
        let node = &mut tree.nodes[three.0];
        std::mem::swap(&mut node.left, &mut node.right);

        // leaves 1, 4, 8 still count; 3 and 5 do not
        assert_eq!(tree.count_bst(), 3);
    }
}
