//! Textual reports over the tree: leaves, nodes by child count, subtrees.

use std::fmt;

use itertools::Itertools;

use super::error::{TreeError, TreeResult};
use super::node::Node;
use super::tree::BinaryContainerTree;
use super::walk::{Traversal, TraversalOrder};

impl<T: fmt::Display> BinaryContainerTree<T> {
    fn pre_order_nodes(&self) -> TreeResult<impl Iterator<Item = &Node<T>> + '_> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        Ok(self.nodes(TraversalOrder::Pre))
    }

    /// `Binary tree - leaves: a, b, c` in pre-order.
    pub fn print_leaves(&self) -> TreeResult<String> {
        let leaves = self
            .pre_order_nodes()?
            .filter(|n| n.is_leaf())
            .map(Node::value)
            .join(", ");
        Ok(format!("Binary tree - leaves: {leaves}"))
    }

    /// One line per node having exactly one child.
    pub fn print_nodes_1_child(&self) -> TreeResult<String> {
        let mut out = String::from("Binary tree - nodes 1 child\n");
        for node in self.pre_order_nodes()?.filter(|n| n.child_count() == 1) {
            let son = match (node.left(), node.right()) {
                (Some(left), _) => format!("left son: {}", left.value()),
                (_, Some(right)) => format!("right son: {}", right.value()),
                (None, None) => continue,
            };
            out.push_str(&format!("Node: {}, {}\n", node.value(), son));
        }
        Ok(out)
    }

    /// One line per node having both children.
    pub fn print_nodes_2_children(&self) -> TreeResult<String> {
        let mut out = String::from("Binary tree - nodes 2 children\n");
        for node in self.pre_order_nodes()? {
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                out.push_str(&format!(
                    "Node: {}, left son: {}, right son: {}\n",
                    node.value(),
                    left.value(),
                    right.value()
                ));
            }
        }
        Ok(out)
    }

    /// One line per node having at least one child.
    pub fn print_nodes_with_children(&self) -> TreeResult<String> {
        let mut out = String::from("Binary tree - nodes with children\n");
        for node in self.pre_order_nodes()? {
            let children = match (node.left(), node.right()) {
                (None, None) => continue,
                (Some(left), Some(right)) => format!("{}, {}", left.value(), right.value()),
                (Some(left), None) => format!("left son: {}", left.value()),
                (None, Some(right)) => format!("right son: {}", right.value()),
            };
            out.push_str(&format!("Node: {}, children: {}\n", node.value(), children));
        }
        Ok(out)
    }
}

impl<T: PartialEq + fmt::Display> BinaryContainerTree<T> {
    /// Pre-order listing of the subtree rooted at the first node holding `value`.
    ///
    /// # Errors
    /// [`TreeError::EmptyTree`] on an empty tree, [`TreeError::ElementNotFound`]
    /// if no node holds `value`.
    pub fn print_sub_tree(&self, value: &T) -> TreeResult<String> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let node = self.find(value).ok_or(TreeError::ElementNotFound)?;
        let listing = Traversal::new(Some(node), TraversalOrder::Pre)
            .map(Node::value)
            .join(", ");
        Ok(format!("Binary tree - subtree: {listing}"))
    }
}
