//! Text views of a tree
//!
//! Vertical view (`Display`):
//!   label line, then one line per node, right subtree above its node and
//!   left subtree below, indented two spaces per level, parent key in brackets.
//! In-order view: label, then every key followed by a space, on one line.
//! Paths: one line per leaf, root-to-leaf keys separated by spaces.

use std::fmt::{self, Write as _};
use std::io;

use super::{NodeId, Tree};

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label)?;
        if self.root.is_none() {
            return f.write_str("Empty Tree\n");
        }

        // reverse in-order: right, node, left
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut cursor = self.root.map(|id| (id, 0));
        loop {
            while let Some((id, depth)) = cursor {
                stack.push((id, depth));
                cursor = self.nodes[id.0].right.map(|r| (r, depth + 1));
            }
            let Some((id, depth)) = stack.pop() else {
                break;
            };

            let node = &self.nodes[id.0];
            write!(f, "{:indent$}{}", "", node.key, indent = depth * 2)?;
            match node.parent {
                Some(parent) => writeln!(f, " [{}]", self.key_of(parent))?,
                None => f.write_str(" [no parent]\n")?,
            }
            cursor = node.left.map(|l| (l, depth + 1));
        }
        Ok(())
    }
}

impl<K: fmt::Display> Tree<K> {
    /// `"<label>: "` followed by every key and a trailing space, in order
    pub fn in_order_string(&self) -> String {
        let mut out = format!("{}: ", self.label);
        for node in self.in_order() {
            // writing into a String cannot fail
            let _ = write!(out, "{} ", node.key());
        }
        out
    }

    /// Write one line per leaf with the keys from the root down to it
    pub fn write_all_paths<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for path in self.leaf_paths() {
            let mut keys = path.iter();
            if let Some(first) = keys.next() {
                write!(out, "{}", first)?;
            }
            for key in keys {
                write!(out, " {}", key)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// [`write_all_paths`](Self::write_all_paths) to stdout
    pub fn print_all_paths(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_all_paths(&mut lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_view() {
        let tree = Tree::from_vec(vec![5, 3, 8, 1, 4], "Tree 1");
        let expected = "Tree 1:\n\
                        \x20\x208 [5]\n\
                        5 [no parent]\n\
                        \x20\x20\x20\x204 [3]\n\
                        \x20\x203 [5]\n\
                        \x20\x20\x20\x201 [3]\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_vertical_view_empty() {
        let tree: Tree<i32> = Tree::new("Nothing");
        assert_eq!(tree.to_string(), "Nothing:\nEmpty Tree\n");
    }

    #[test]
    fn test_in_order_view() {
        let tree = Tree::from_vec(vec![5, 3, 8, 1, 4], "Tree 1");
        assert_eq!(tree.in_order_string(), "Tree 1: 1 3 4 5 8 ");

        let empty: Tree<i32> = Tree::new("Nothing");
        assert_eq!(empty.in_order_string(), "Nothing: ");
    }

    #[test]
    fn test_paths_output() {
        let tree = Tree::from_vec(vec![5, 3, 8, 1, 4], "t");
        let mut buf = Vec::new();
        tree.write_all_paths(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "5 3 1\n5 3 4\n5 8\n");
    }

    #[test]
    fn test_paths_output_empty() {
        let tree: Tree<&str> = Tree::new("t");
        let mut buf = Vec::new();
        tree.write_all_paths(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
