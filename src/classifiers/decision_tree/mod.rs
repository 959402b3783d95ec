mod node;
mod split;
mod tree;

pub use node::TreeNode;
pub use tree::{DecisionTree, MIN_SAMPLES_SPLIT, TreeError};
