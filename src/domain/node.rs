//! Tree node with exclusive ownership of its children.

use std::fmt;

/// Path label carried by the root node.
pub const ROOT_PATH: &str = "root";

/// Owned link to an optional child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Node of a [`BinaryContainerTree`](super::BinaryContainerTree).
///
/// The path label is diagnostic only: it records the route from the root,
/// e.g. `root/left/right`, and is rewritten whenever the node moves.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) path: String,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, path: String) -> Self {
        Self {
            value,
            left: None,
            right: None,
            path,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of present children (0, 1 or 2).
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    pub(crate) fn size(&self) -> usize {
        1 + self.left().map_or(0, Node::size) + self.right().map_or(0, Node::size)
    }

    pub(crate) fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left().map_or(0, Node::leaf_count) + self.right().map_or(0, Node::leaf_count)
    }

    /// Rewrites the label of this node and of every descendant so they start
    /// from `path`.
    pub(crate) fn relabel(&mut self, path: String) {
        if let Some(left) = self.left.as_mut() {
            left.relabel(format!("{path}/left"));
        }
        if let Some(right) = self.right.as_mut() {
            right.relabel(format!("{path}/right"));
        }
        self.path = path;
    }

    /// First leaf found depth-first, left side before right side.
    pub(crate) fn first_leaf(&self) -> Option<&Node<T>> {
        if self.is_leaf() {
            return Some(self);
        }
        self.left()
            .and_then(Node::first_leaf)
            .or_else(|| self.right().and_then(Node::first_leaf))
    }
}

impl<T: PartialEq> Node<T> {
    /// Pre-order search: this node, then the left subtree, then the right one.
    pub(crate) fn find(&self, value: &T) -> Option<&Node<T>> {
        if self.value == *value {
            return Some(self);
        }
        self.left()
            .and_then(|n| n.find(value))
            .or_else(|| self.right().and_then(|n| n.find(value)))
    }
}

/// Height of an optional subtree; an absent subtree has height -1.
pub(crate) fn subtree_height<T>(node: Option<&Node<T>>) -> i32 {
    match node {
        None => -1,
        Some(n) => subtree_height(n.left()).max(subtree_height(n.right())) + 1,
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32, path: &str) -> Box<Node<i32>> {
        Box::new(Node::new(value, path.to_string()))
    }

    #[test]
    fn given_single_node_when_measuring_then_height_is_zero() {
        let node = Node::new(1, ROOT_PATH.to_string());
        assert_eq!(subtree_height(Some(&node)), 0);
        assert_eq!(subtree_height::<i32>(None), -1);
        assert!(node.is_leaf());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn given_nested_nodes_when_relabelled_then_all_descendants_follow() {
        let mut middle = Node::new(2, "root/left".to_string());
        middle.right = Some(leaf(3, "root/left/right"));
        let mut top = Node::new(1, "root/right/left".to_string());
        top.left = Some(Box::new(middle));

        top.relabel("root".to_string());

        assert_eq!(top.path(), "root");
        let middle = top.left().unwrap();
        assert_eq!(middle.path(), "root/left");
        assert_eq!(middle.right().unwrap().path(), "root/left/right");
    }

    #[test]
    fn given_left_without_leaf_when_searching_first_leaf_then_prefers_left_subtree() {
        let mut root = Node::new(1, ROOT_PATH.to_string());
        let mut left = Node::new(2, "root/left".to_string());
        left.right = Some(leaf(4, "root/left/right"));
        root.left = Some(Box::new(left));
        root.right = Some(leaf(3, "root/right"));

        assert_eq!(root.first_leaf().map(Node::value), Some(&4));
        assert_eq!(root.size(), 4);
        assert_eq!(root.leaf_count(), 2);
    }
}
