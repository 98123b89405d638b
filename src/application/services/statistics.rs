//! Tree statistics and the complete textual report.

use std::fmt;

use crate::application::{ApplicationResult, Value};
use crate::domain::{BinaryContainerTree, TraversalOrder, TreeError, TreeRender};

/// Summary numbers of a non-empty tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStatistics {
    pub size: usize,
    pub height: i32,
    pub leaves: usize,
    pub min: Value,
    pub max: Value,
    pub average: f64,
    pub balanced: bool,
}

impl TreeStatistics {
    /// # Errors
    /// [`TreeError::EmptyTree`] (wrapped) on an empty tree.
    pub fn from_tree(tree: &BinaryContainerTree<Value>) -> ApplicationResult<Self> {
        let size = tree.size()?;
        let values = tree.values();
        let min = values.iter().copied().min().ok_or(TreeError::EmptyTree)?;
        let max = values.iter().copied().max().ok_or(TreeError::EmptyTree)?;
        let sum: i64 = values.iter().map(|v| i64::from(**v)).sum();

        Ok(Self {
            size,
            height: tree.height()?,
            leaves: tree.total_leaves()?,
            min: *min,
            max: *max,
            average: sum as f64 / size as f64,
            balanced: tree.is_height_balanced(),
        })
    }
}

impl fmt::Display for TreeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of elements: {}", self.size)?;
        writeln!(f, "Tree height: {}", self.height)?;
        writeln!(f, "Number of leaves: {}", self.leaves)?;
        writeln!(f, "Minimum value: {}", self.min)?;
        writeln!(f, "Maximum value: {}", self.max)?;
        writeln!(f, "Average: {:.2}", self.average)?;
        write!(f, "Balanced: {}", if self.balanced { "yes" } else { "no" })
    }
}

/// Statistics, traversals, node reports and structure in one document.
pub fn complete_report(tree: &BinaryContainerTree<Value>) -> ApplicationResult<String> {
    if tree.is_empty() {
        return Ok("=== BINARY TREE REPORT ===\n\nThe tree is empty.\n".to_string());
    }

    let mut report = String::from("=== BINARY TREE REPORT ===\n\n");
    report.push_str(&TreeStatistics::from_tree(tree)?.to_string());
    report.push_str("\n\n=== TRAVERSALS ===\n");
    for order in TraversalOrder::ALL {
        report.push_str(&format!("{:<10} {}\n", format!("{order}:"), tree.traversal(order)?));
    }

    report.push_str("\n=== NODES ===\n");
    report.push_str(&tree.print_leaves()?);
    report.push_str("\n\n");
    report.push_str(&tree.print_nodes_1_child()?);
    report.push('\n');
    report.push_str(&tree.print_nodes_2_children()?);
    report.push('\n');
    report.push_str(&tree.print_nodes_with_children()?);

    report.push_str("\n=== STRUCTURE ===\n");
    report.push_str(&tree.to_tree_string().to_string());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryContainerTree<Value> {
        [20, 30, 18, 4, 5, 50, 70].into_iter().collect()
    }

    #[test]
    fn given_sample_when_computing_statistics_then_all_fields_match() {
        let stats = TreeStatistics::from_tree(&sample()).unwrap();
        assert_eq!(stats.size, 7);
        assert_eq!(stats.height, 3);
        assert_eq!(stats.leaves, 3);
        assert_eq!(stats.min, 4);
        assert_eq!(stats.max, 70);
        assert!((stats.average - 197.0 / 7.0).abs() < 1e-9);
        assert!(stats.balanced);
    }

    #[test]
    fn given_empty_tree_when_computing_statistics_then_empty_tree_error() {
        let tree = BinaryContainerTree::new();
        assert!(TreeStatistics::from_tree(&tree).is_err());
    }

    #[test]
    fn given_sample_when_reporting_then_contains_every_section() {
        let report = complete_report(&sample()).unwrap();
        assert!(report.contains("Number of elements: 7"));
        assert!(report.contains("Average: 28.14"));
        assert!(report.contains("PreOrder:  20 30 4 70 50 18 5"));
        assert!(report.contains("Binary tree - leaves: 70, 50, 5"));
        assert!(report.contains("Binary tree - nodes 2 children"));
        assert!(report.contains("=== STRUCTURE ==="));
    }

    #[test]
    fn given_empty_tree_when_reporting_then_says_empty() {
        let report = complete_report(&BinaryContainerTree::new()).unwrap();
        assert!(report.contains("The tree is empty."));
    }
}
