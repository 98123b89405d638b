//! Binary container tree with structural-balance insertion.
//!
//! Values are placed by comparing subtree heights, never by comparing values,
//! so the tree is not a search tree: every lookup is an exhaustive walk.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use itertools::Itertools;
use tracing::{debug, instrument, trace, warn};

use super::error::{TreeError, TreeResult};
use super::node::{subtree_height, Link, Node, ROOT_PATH};
use super::walk::TraversalOrder;

/// In-memory binary tree of unique values.
///
/// Empty iff the root is absent. The tree exclusively owns every node, so no
/// node can be shared between two parents.
#[derive(Debug, Clone)]
pub struct BinaryContainerTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryContainerTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryContainerTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
    }

    fn non_empty_root(&self) -> TreeResult<&Node<T>> {
        self.root().ok_or(TreeError::EmptyTree)
    }

    /// Number of nodes.
    ///
    /// # Errors
    /// [`TreeError::EmptyTree`] on an empty tree.
    pub fn size(&self) -> TreeResult<usize> {
        Ok(self.non_empty_root()?.size())
    }

    /// Height of the tree; a single node has height 0.
    ///
    /// # Errors
    /// [`TreeError::EmptyTree`] on an empty tree.
    pub fn height(&self) -> TreeResult<i32> {
        let root = self.non_empty_root()?;
        Ok(subtree_height(Some(root)))
    }

    /// Number of childless nodes.
    pub fn total_leaves(&self) -> TreeResult<usize> {
        Ok(self.non_empty_root()?.leaf_count())
    }

    /// True iff the subtree heights of every node differ by at most one.
    pub fn is_height_balanced(&self) -> bool {
        fn balanced_height<T>(node: Option<&Node<T>>) -> Option<i32> {
            let Some(node) = node else { return Some(-1) };
            let left = balanced_height(node.left())?;
            let right = balanced_height(node.right())?;
            if (left - right).abs() > 1 {
                return None;
            }
            Some(left.max(right) + 1)
        }
        balanced_height(self.root()).is_some()
    }
}

impl<T: PartialEq> BinaryContainerTree<T> {
    /// Exhaustive membership test.
    ///
    /// # Errors
    /// [`TreeError::EmptyTree`] on an empty tree, even though the answer
    /// would trivially be `false`.
    pub fn contains(&self, value: &T) -> TreeResult<bool> {
        Ok(self.non_empty_root()?.find(value).is_some())
    }

    /// First node holding `value`, searched in pre-order.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.root().and_then(|root| root.find(value))
    }

    /// Path label of the first node holding `value`.
    pub fn path_of(&self, value: &T) -> Option<&str> {
        self.find(value).map(Node::path)
    }

    /// Depth (root = 0) of the first node holding `value`.
    ///
    /// Both children are searched and the larger result wins; absent nodes
    /// answer 0. A value that is not in the tree therefore yields 0 instead
    /// of an error.
    ///
    /// # Errors
    /// [`TreeError::EmptyTree`] on an empty tree.
    pub fn height_of(&self, value: &T) -> TreeResult<i32> {
        fn depth<T: PartialEq>(node: Option<&Node<T>>, value: &T, level: i32) -> i32 {
            match node {
                None => 0,
                Some(n) if n.value == *value => level,
                Some(n) => depth(n.left(), value, level + 1).max(depth(n.right(), value, level + 1)),
            }
        }
        let root = self.non_empty_root()?;
        Ok(depth(Some(root), value, 0))
    }
}

impl<T: PartialEq + Clone + fmt::Debug> BinaryContainerTree<T> {
    /// Inserts `value` unless it is already present.
    ///
    /// The duplicate check fails open: should the existence check itself
    /// error, insertion proceeds. Placement descends from the root towards
    /// the lower subtree (left on ties) and attaches a new leaf at the first
    /// free slot on that side.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, value: T) {
        match self.contains(&value) {
            Ok(true) => {
                debug!("add: {:?} already present, ignored", value);
                return;
            }
            Ok(false) => {}
            Err(e) => trace!("add: existence check failed ({}), inserting anyway", e),
        }

        match self.root.as_deref_mut() {
            None => self.root = Some(Box::new(Node::new(value, ROOT_PATH.to_string()))),
            Some(root) => Self::add_balanced(root, value),
        }
    }

    fn add_balanced(node: &mut Node<T>, value: T) {
        let go_left = subtree_height(node.left()) <= subtree_height(node.right());
        trace!(
            "add_balanced: at {:?} ({}), descending {}",
            node.value,
            node.path,
            if go_left { "left" } else { "right" }
        );
        let (slot, side) = if go_left {
            (&mut node.left, "left")
        } else {
            (&mut node.right, "right")
        };
        match slot {
            Some(child) => Self::add_balanced(child, value),
            None => {
                let path = format!("{}/{}", node.path, side);
                *slot = Some(Box::new(Node::new(value, path)));
            }
        }
    }

    /// Removes the first node (pre-order) holding `value`.
    ///
    /// - a leaf is detached;
    /// - a node with one child is replaced by that child, whose subtree is
    ///   relabelled from the removed node's path;
    /// - a node with two children takes the value of the first leaf of its
    ///   right subtree, and that leaf is deleted.
    ///
    /// Returns `false` when no node holds `value`.
    ///
    /// # Errors
    /// [`TreeError::EmptyTree`] on an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, value: &T) -> TreeResult<bool> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let removed = Self::remove_from(&mut self.root, value);
        debug!("remove: {:?} removed={}", value, removed);
        Ok(removed)
    }

    fn remove_from(slot: &mut Link<T>, value: &T) -> bool {
        let Some(node) = slot.as_deref_mut() else {
            return false;
        };
        if node.value == *value {
            Self::unlink(slot);
            return true;
        }
        Self::remove_from(&mut node.left, value) || Self::remove_from(&mut node.right, value)
    }

    fn unlink(slot: &mut Link<T>) {
        let Some(node) = slot.as_deref_mut() else {
            return;
        };
        match (node.left.is_some(), node.right.is_some()) {
            (false, false) => *slot = None,
            (true, true) => {
                let Some(successor) = node
                    .right()
                    .and_then(Node::first_leaf)
                    .map(|leaf| leaf.value.clone())
                else {
                    return;
                };
                let found = Self::remove_leaf(&mut node.right, &successor);
                if !found {
                    warn!("unlink: leaf {:?} not found in right subtree", successor);
                }
                node.value = successor;
            }
            _ => {
                let path = std::mem::take(&mut node.path);
                if let Some(mut child) = node.left.take().or_else(|| node.right.take()) {
                    child.relabel(path);
                    *slot = Some(child);
                }
            }
        }
    }

    /// Deletes the first leaf holding `value`, searching left before right.
    /// Inner nodes holding `value` are left untouched.
    fn remove_leaf(slot: &mut Link<T>, value: &T) -> bool {
        let Some(node) = slot.as_deref_mut() else {
            return false;
        };
        if node.is_leaf() {
            if node.value == *value {
                *slot = None;
                return true;
            }
            return false;
        }
        Self::remove_leaf(&mut node.left, value) || Self::remove_leaf(&mut node.right, value)
    }
}

impl<T: fmt::Display> BinaryContainerTree<T> {
    fn joined(&self, order: TraversalOrder) -> TreeResult<String> {
        self.non_empty_root()?;
        Ok(self.iter(order).join(" "))
    }

    /// Values in node-left-right order, space separated.
    pub fn pre_order(&self) -> TreeResult<String> {
        self.joined(TraversalOrder::Pre)
    }

    /// Values in left-node-right order, space separated.
    pub fn in_order(&self) -> TreeResult<String> {
        self.joined(TraversalOrder::In)
    }

    /// Values in left-right-node order, space separated.
    pub fn post_order(&self) -> TreeResult<String> {
        self.joined(TraversalOrder::Post)
    }

    pub fn traversal(&self, order: TraversalOrder) -> TreeResult<String> {
        self.joined(order)
    }
}

impl<T: Eq + Hash + fmt::Debug> BinaryContainerTree<T> {
    /// Self-check: false if a node is reachable twice or a value repeats.
    pub fn validate_structure(&self) -> bool {
        let mut visited: HashSet<*const Node<T>> = HashSet::new();
        let mut values: HashSet<&T> = HashSet::new();
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            if !visited.insert(node as *const Node<T>) {
                warn!("validate_structure: cycle detected at {:?}", node.value);
                return false;
            }
            if !values.insert(&node.value) {
                warn!("validate_structure: duplicate value {:?}", node.value);
                return false;
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
        true
    }
}

impl<T: fmt::Display> fmt::Display for BinaryContainerTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Binary Tree is empty");
        }
        let lines = TraversalOrder::ALL
            .iter()
            .map(|order| format!("{}: {}", order, self.iter(*order).join(" ")))
            .join("\n");
        f.write_str(&lines)
    }
}

impl<T: PartialEq + Clone + fmt::Debug> Extend<T> for BinaryContainerTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: PartialEq + Clone + fmt::Debug> FromIterator<T> for BinaryContainerTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
