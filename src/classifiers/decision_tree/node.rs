use crate::core::Label;
use serde::{Deserialize, Serialize};

/// A node of a trained tree: an internal threshold test or a leaf.
///
/// Internal nodes route `feature <= threshold` to `left` and everything
/// else to `right`. Leaves carry the majority label and the class counts
/// observed at training time (`[yes, no]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        label: Label,
        counts: [usize; 2],
    },
}

impl TreeNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Split { left, right, .. } => left.leaf_count() + right.leaf_count(),
            TreeNode::Leaf { .. } => 1,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
            TreeNode::Leaf { .. } => 0,
        }
    }
}
