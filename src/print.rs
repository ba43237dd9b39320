//! Renders an [`OrderedTree`] like a directory listing, one node per line. A child that is the
//! last one drawn under its parent gets `└`, any other child gets `├`, and the columns below a
//! `├` carry a `│` down to its next sibling.
//!
//! ```text
//! └8
//!  ├1
//!  │└5
//!  └10
//! ```
//!
//! The left child is drawn before the right child, so a left child is only last when there is
//! no right child.

use std::fmt;
use std::io;

use crate::tree::{Node, OrderedTree};

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, bool, String)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, true, String::new()));
        }

        while let Some((node, last, mut indent)) = stack.pop() {
            let (branch, column) = if last { ('└', ' ') } else { ('├', '│') };
            writeln!(f, "{}{}{}", indent, branch, node.key())?;

            indent.push(column);
            if let Some(right) = node.right() {
                stack.push((right, true, indent.clone()));
            }
            if let Some(left) = node.left() {
                stack.push((left, node.right().is_none(), indent));
            }
        }

        Ok(())
    }
}

impl<T> OrderedTree<T>
where
    T: fmt::Display,
{
    /// Writes the tree's shape to `out`. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(3);
    ///
    /// let mut out = Vec::new();
    /// tree.write_tree(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "└2\n ├1\n └3\n");
    /// ```
    pub fn write_tree(&self, mut out: impl io::Write) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Prints the tree's shape to stdout.
    pub fn print_tree(&self) {
        print!("{}", self);
    }
}
