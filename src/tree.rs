//! An unbalanced BST. Every `Node` owns its children outright and there are no parent pointers -
//! anything that needs "the parent of X" finds it again by descending from the root.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.count(), 0);
//!
//! tree.add(2);
//! tree.add(1);
//! tree.add(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.count(), 3);
//!
//! // Deleting reports whether anything was there to delete.
//! assert!(tree.delete(&2));
//! assert!(!tree.delete(&2));
//! assert_eq!(tree.count(), 2);
//! assert!(tree.is_valid());
//! ```

use std::cmp::Ordering;

use log::{debug, trace, warn};

/// An owned, possibly empty, child slot. The tree's root is one of these too.
pub type Link<T> = Option<Box<Node<T>>>;

/// How [`OrderedTree::delete`] detaches the in-order successor when the deleted node has two
/// children and the successor is _not_ its direct right child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessorSplice {
    /// Clear the left edge of the successor's parent. If the successor had a right subtree, that
    /// subtree goes with it and is lost from the tree.
    Detach,
    /// Re-link the successor's right subtree onto the left edge of the successor's parent so no
    /// other keys are lost.
    Relink,
}

impl Default for SuccessorSplice {
    fn default() -> Self {
        Self::Detach
    }
}

/// A `Node` holds a key and up to two children which it exclusively owns. A `Node` with no
/// children is a leaf.
#[derive(Clone, Debug)]
pub struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `key`.
    pub fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The left child slot. Nothing stops a caller from attaching a node that breaks the
    /// ordering; [`OrderedTree::is_valid`] will report it.
    pub fn left_mut(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    /// The right child slot. See [`Node::left_mut`].
    pub fn right_mut(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Overwrites this node's key with its in-order successor's and unlinks the successor. Must
    /// only be called on a node with two children.
    fn take_successor(&mut self, splice: SuccessorSplice) -> Removal {
        let right = self
            .right
            .as_deref_mut()
            .expect("Two children => right child");

        if right.left.is_none() {
            // The right child is the successor. It has no left child so its right subtree is the
            // only thing to keep.
            let successor = self.right.take().expect("Two children => right child");
            let Node {
                key,
                right: successor_right,
                ..
            } = *successor;
            self.key = key;
            self.right = successor_right;
            return Removal::Successor {
                direct: true,
                discarded: 0,
            };
        }

        let mut parent = right;
        while parent.left.as_ref().map_or(false, |n| n.left.is_some()) {
            parent = parent.left.as_deref_mut().expect("Checked left grandchild");
        }

        let successor = parent.left.take().expect("Checked left child");
        let Node {
            key,
            right: orphan,
            ..
        } = *successor;
        self.key = key;

        let discarded = match splice {
            SuccessorSplice::Detach => drop_subtree(orphan),
            SuccessorSplice::Relink => {
                parent.left = orphan;
                0
            }
        };
        Removal::Successor {
            direct: false,
            discarded,
        }
    }
}

/// Which case [`OrderedTree::delete`] went through to remove a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The node had no children. It was unlinked from its parent (or was the whole tree).
    Leaf,
    /// The node only had a left child, which took its place.
    SpliceLeft,
    /// The node only had a right child, which took its place.
    SpliceRight,
    /// The node had two children and took its in-order successor's key. `direct` is whether the
    /// successor was its right child and `discarded` counts nodes lost below the successor.
    Successor { direct: bool, discarded: usize },
}

/// An unbalanced Binary Search Tree. Keys that compare equal to an existing key are placed in
/// its left subtree, so duplicates can be added but the tree no longer passes
/// [`OrderedTree::is_valid`] afterwards.
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    root: Link<T>,
    splice: SuccessorSplice,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree` which deletes with [`SuccessorSplice::Detach`].
    pub fn new() -> Self {
        Self::with_splice(SuccessorSplice::default())
    }

    /// Generate a new, empty `OrderedTree` with the given successor splice policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, SuccessorSplice};
    ///
    /// let mut tree = OrderedTree::with_splice(SuccessorSplice::Relink);
    /// for key in [5, 2, 10, 7, 12, 8] {
    ///     tree.add(key);
    /// }
    ///
    /// // 7 replaces 5 and 8, which hung off 7, is kept.
    /// assert!(tree.delete(&5));
    /// assert_eq!(tree.count(), 5);
    /// assert!(tree.contains(&8));
    /// ```
    pub fn with_splice(splice: SuccessorSplice) -> Self {
        Self { root: None, splice }
    }

    /// The successor splice policy this tree deletes with.
    pub fn splice(&self) -> SuccessorSplice {
        self.splice
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node from the tree.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
    }

    /// Adds `key` to the tree. This always succeeds and never rebalances. A key equal to one
    /// already in the tree is sent left at that node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(4);
    /// tree.add(3);
    ///
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.key()), Some(3));
    /// ```
    pub fn add(&mut self, key: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = if key > node.key {
                &mut node.right
            } else {
                &mut node.left
            };
            depth += 1;
        }

        trace!("adding node at depth {}", depth);
        *link = Some(Box::new(Node::new(key)));
    }

    /// Finds the node holding `key`. If there isn't one this returns the last node the search
    /// visited instead, so callers have to check the key of whatever comes back. Only an empty
    /// tree gives `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.find_node(&1).is_none());
    ///
    /// tree.add(2);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find_node(&1).map(|n| *n.key()), Some(1));
    /// // 0 isn't there - the search stopped at 1.
    /// assert_eq!(tree.find_node(&0).map(|n| *n.key()), Some(1));
    /// ```
    pub fn find_node(&self, key: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut previous = None;
        while let Some(node) = current {
            previous = Some(node);
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        previous
    }

    /// Same as [`OrderedTree::find_node`] but the node can be modified.
    pub fn find_node_mut(&mut self, key: &T) -> Option<&mut Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut()?;
        loop {
            let ordering = key.cmp(&current.key);
            let next = match ordering {
                Ordering::Equal => return Some(current),
                Ordering::Less => &current.left,
                Ordering::Greater => &current.right,
            };
            if next.is_none() {
                return Some(current);
            }

            current = match ordering {
                Ordering::Less => current.left.as_deref_mut(),
                _ => current.right.as_deref_mut(),
            }
            .expect("Checked child");
        }
    }

    /// Whether a node with exactly `key` is in the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.find_node(key).map_or(false, |n| n.key == *key)
    }

    /// Deletes the node holding `key`. Returns `false`, changing nothing, when there isn't one.
    ///
    /// A node with two children stays where it is and takes the key of its in-order successor
    /// (the leftmost node of its right subtree), which is unlinked instead. When that successor
    /// is deeper than the right child, its own right subtree is handled by the tree's
    /// [`SuccessorSplice`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(4);
    /// tree.add(5);
    ///
    /// assert!(tree.delete(&4));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    /// assert!(!tree.delete(&4));
    /// ```
    pub fn delete(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        self.remove(key).is_some()
    }

    pub(crate) fn remove(&mut self, key: &T) -> Option<Removal>
    where
        T: Ord,
    {
        let splice = self.splice;
        let mut link = &mut self.root;
        let mut depth = 0;
        loop {
            let ordering = key.cmp(&link.as_deref()?.key);
            link = match ordering {
                Ordering::Equal => break,
                Ordering::Less => &mut link.as_mut().expect("Compared against it").left,
                Ordering::Greater => &mut link.as_mut().expect("Compared against it").right,
            };
            depth += 1;
        }

        let target = link.as_deref_mut().expect("Descent stopped on a match");
        let removal = match (target.left.is_some(), target.right.is_some()) {
            (false, false) => {
                *link = None;
                Removal::Leaf
            }
            (true, false) => {
                *link = target.left.take();
                Removal::SpliceLeft
            }
            (false, true) => {
                *link = target.right.take();
                Removal::SpliceRight
            }
            (true, true) => target.take_successor(splice),
        };

        debug!("deleted node at depth {} ({:?})", depth, removal);
        if let Removal::Successor {
            direct: false,
            discarded,
        } = removal
        {
            if discarded > 0 {
                warn!(
                    "discarded {} node(s) from the in-order successor's right subtree",
                    discarded
                );
            }
        }

        Some(removal)
    }

    /// How many nodes are in the tree. This walks the whole tree every time.
    pub fn count(&self) -> usize {
        self.preorder().count()
    }

    /// Checks that every node's left child has a smaller key and every right child a larger one.
    /// Each node is only compared against its own children. An empty tree is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(5);
    /// assert!(tree.is_valid());
    ///
    /// if let Some(five) = tree.find_node_mut(&5) {
    ///     *five.left_mut() = Some(Box::new(Node::new(6)));
    /// }
    /// assert!(!tree.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        self.preorder().all(|node| {
            node.left().map_or(true, |left| left.key < node.key)
                && node.right().map_or(true, |right| right.key > node.key)
        })
    }

    fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: self.root().into_iter().collect(),
        }
    }
}

/// Visits a node, then its left subtree, then its right subtree, using an explicit stack.
struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Drops a subtree one node at a time so a long chain can't overflow the stack. Returns how many
/// nodes it held.
fn drop_subtree<T>(link: Link<T>) -> usize {
    let mut dropped = 0;
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        dropped += 1;
    }

    dropped
}
