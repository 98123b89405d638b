/*
Box-drawing rendering of a tree via termtree.

termtree only knows about n-ary children, so a missing left child next to a
present right child would be indistinguishable from a left child. Absent
siblings of present children are rendered as a `·` placeholder.
 */
use std::fmt;

use termtree::Tree;
use tracing::instrument;

use super::node::Node;
use super::tree::BinaryContainerTree;

const ABSENT: &str = "·";

pub trait TreeRender {
    /// Values only.
    fn to_tree_string(&self) -> Tree<String>;

    /// Values followed by their path label, e.g. `5 (root/right/left)`.
    fn to_path_tree_string(&self) -> Tree<String>;
}

fn render<T: fmt::Display>(node: &Node<T>, with_paths: bool) -> Tree<String> {
    let label = if with_paths {
        format!("{} ({})", node.value(), node.path())
    } else {
        node.value().to_string()
    };

    let leaves: Vec<Tree<String>> = if node.is_leaf() {
        Vec::new()
    } else {
        [node.left(), node.right()]
            .into_iter()
            .map(|child| match child {
                Some(c) => render(c, with_paths),
                None => Tree::new(ABSENT.to_string()),
            })
            .collect()
    };

    Tree::new(label).with_leaves(leaves)
}

impl<T: fmt::Display> TreeRender for Node<T> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        render(self, false)
    }

    fn to_path_tree_string(&self) -> Tree<String> {
        render(self, true)
    }
}

impl<T: fmt::Display> TreeRender for BinaryContainerTree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }

    fn to_path_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_path_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_rendering_then_single_placeholder_line() {
        let tree: BinaryContainerTree<i32> = BinaryContainerTree::new();
        assert_eq!(tree.to_tree_string().to_string().trim_end(), "Empty tree");
    }

    #[test]
    fn given_small_tree_when_rendering_then_shows_values_and_absent_siblings() {
        // 1 -> left 2, right 3; 2 -> left 4
        let tree: BinaryContainerTree<i32> = [1, 2, 3, 4].into_iter().collect();
        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "1");
        assert!(lines.iter().any(|l| l.ends_with("2")));
        assert!(lines.iter().any(|l| l.ends_with("4")));
        assert!(lines.iter().any(|l| l.ends_with(ABSENT)));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn given_small_tree_when_rendering_with_paths_then_labels_follow_values() {
        let tree: BinaryContainerTree<i32> = [1, 2].into_iter().collect();
        let rendered = tree.to_path_tree_string().to_string();
        assert!(rendered.starts_with("1 (root)"));
        assert!(rendered.contains("2 (root/left)"));
    }
}
