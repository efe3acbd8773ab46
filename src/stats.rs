//! Structural summary of a tree

use crate::Tree;

/// Snapshot of a tree's shape
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeStats {
    /// Tree label
    pub label: String,

    /// Total node count
    pub nodes: usize,

    /// Number of levels
    pub height: usize,

    /// Node count per level, root level first
    pub levels: Vec<usize>,

    /// Nodes rooting an ordered subtree
    pub bst_count: usize,
}

impl TreeStats {
    /// Collect stats for `tree`
    pub fn collect<K: Ord>(tree: &Tree<K>) -> Self {
        let height = tree.height();
        Self {
            label: tree.label().to_string(),
            nodes: tree.len(),
            height,
            levels: (0..height).map(|level| tree.nodes_in_level(level)).collect(),
            bst_count: tree.count_bst(),
        }
    }

    /// Height of a perfectly balanced tree with the same node count
    pub fn min_height(&self) -> usize {
        (usize::BITS - self.nodes.leading_zeros()) as usize
    }

    /// True when no rebalance could lower the height
    pub fn is_minimal(&self) -> bool {
        self.height == self.min_height()
    }

    /// Generate report
    pub fn report(&self) -> String {
        let levels = self
            .levels
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{}\n  nodes: {}\n  height: {} (minimal {})\n  per level: {}\n  ordered subtrees: {}",
            self.label,
            self.nodes,
            self.height,
            self.min_height(),
            levels,
            self.bst_count
        )
    }
}

impl<K: Ord> Tree<K> {
    /// Structural summary
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_height() {
        for (nodes, expected) in [(0, 0), (1, 1), (2, 2), (3, 2), (4, 3), (7, 3), (8, 4)] {
            let stats = TreeStats {
                label: String::new(),
                nodes,
                height: 0,
                levels: Vec::new(),
                bst_count: 0,
            };
            assert_eq!(stats.min_height(), expected, "nodes = {}", nodes);
        }
    }

    #[test]
    fn test_collect() {
        let tree = Tree::from_vec(vec![5, 3, 8, 1, 4], "t");
        let stats = tree.stats();
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.height, 3);
        assert_eq!(stats.levels, vec![1, 2, 2]);
        assert_eq!(stats.bst_count, 5);
        assert!(stats.is_minimal());
        assert!(stats.report().contains("per level: 1 2 2"));
    }
}
