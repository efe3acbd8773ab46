//! Shared helpers for integration tests

#![allow(dead_code)]

use bstree::Tree;

/// Keys in in-order sequence, copied out of the tree
pub fn keys_of(tree: &Tree<i64>) -> Vec<i64> {
    tree.in_order_keys().into_iter().copied().collect()
}

/// Check that every child points back at its parent and only the root is an orphan
pub fn assert_links_consistent<K>(tree: &Tree<K>) {
    let mut orphans = 0;
    for node in tree.in_order() {
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert_eq!(
                child.parent().map(|p| p.id()),
                Some(node.id()),
                "child {} does not point back at {}",
                child.id(),
                node.id()
            );
        }
        if node.parent().is_none() {
            orphans += 1;
            assert_eq!(tree.root().map(|r| r.id()), Some(node.id()));
        }
    }
    assert_eq!(orphans, usize::from(!tree.is_empty()), "exactly one root expected");
}

/// Child and parent ids of every node, in in-order sequence
pub fn shape(tree: &Tree<i64>) -> String {
    tree.in_order()
        .map(|n| {
            format!(
                "{}:{:?}/{:?}/{:?}",
                n.id(),
                n.left().map(|c| c.id()),
                n.right().map(|c| c.id()),
                n.parent().map(|c| c.id())
            )
        })
        .collect::<Vec<_>>()
        .join(",")
}
