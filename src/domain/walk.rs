//! Stack-driven traversals and the read-only export walk.
//!
//! Renderers and reports consume these iterators instead of reaching into the
//! node links. No traversal recurses and none shares mutable state with the
//! caller.

use std::fmt;

use tracing::instrument;

use super::node::Node;
use super::tree::BinaryContainerTree;

/// Depth-first visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// node, left, right
    Pre,
    /// left, node, right
    In,
    /// left, right, node
    Post,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [Self::Pre, Self::In, Self::Post];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pre => "PreOrder",
            Self::In => "InOrder",
            Self::Post => "PostOrder",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Iterator over the nodes of a tree in a given [`TraversalOrder`].
///
/// Each stack entry carries an `expanded` flag: an unexpanded node is replaced
/// by its children and itself (expanded) in the order that yields the wanted
/// sequence, an expanded node is emitted.
pub struct Traversal<'a, T> {
    order: TraversalOrder,
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Traversal<'a, T> {
    #[instrument(level = "trace", skip(root))]
    pub(crate) fn new(root: Option<&'a Node<T>>, order: TraversalOrder) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push((root, false));
        }
        Self { order, stack }
    }

    fn push_child(&mut self, child: Option<&'a Node<T>>) {
        if let Some(child) = child {
            self.stack.push((child, false));
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }
            // Pushed in reverse so the first one to visit ends up on top
            match self.order {
                TraversalOrder::Pre => {
                    self.push_child(node.right());
                    self.push_child(node.left());
                    self.stack.push((node, true));
                }
                TraversalOrder::In => {
                    self.push_child(node.right());
                    self.stack.push((node, true));
                    self.push_child(node.left());
                }
                TraversalOrder::Post => {
                    self.stack.push((node, true));
                    self.push_child(node.right());
                    self.push_child(node.left());
                }
            }
        }
        None
    }
}

/// Read-only snapshot of one node as seen by an external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView<'a, T> {
    pub value: &'a T,
    /// Distance from the root (root = 0)
    pub depth: usize,
    pub path: &'a str,
    pub has_left: bool,
    pub has_right: bool,
}

/// Lazy pre-order walk producing [`NodeView`]s.
pub struct NodeWalk<'a, T> {
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> NodeWalk<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|r| (r, 0)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for NodeWalk<'a, T> {
    type Item = NodeView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left() {
            self.stack.push((left, depth + 1));
        }
        Some(NodeView {
            value: node.value(),
            depth,
            path: node.path(),
            has_left: node.left().is_some(),
            has_right: node.right().is_some(),
        })
    }
}

impl<T> BinaryContainerTree<T> {
    /// Nodes in the given order.
    pub fn nodes(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self.root(), order)
    }

    /// Values in the given order.
    pub fn iter(&self, order: TraversalOrder) -> impl Iterator<Item = &T> + '_ {
        self.nodes(order).map(Node::value)
    }

    /// Pre-order export of `(value, depth, path, children present)` tuples.
    pub fn walk(&self) -> NodeWalk<'_, T> {
        NodeWalk::new(self.root())
    }

    /// Tour numbering: each value paired with its 1-based position in `order`.
    pub fn numbered(&self, order: TraversalOrder) -> Vec<(usize, &T)> {
        self.iter(order)
            .enumerate()
            .map(|(idx, value)| (idx + 1, value))
            .collect()
    }

    /// All values in pre-order; empty for an empty tree.
    pub fn values(&self) -> Vec<&T> {
        self.iter(TraversalOrder::Pre).collect()
    }
}
