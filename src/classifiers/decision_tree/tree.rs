use crate::classifiers::decision_tree::node::TreeNode;
use crate::classifiers::decision_tree::split::{best_split, class_counts};
use crate::core::Label;
use serde::{Deserialize, Serialize};

/// A node stops splitting below this many samples.
pub const MIN_SAMPLES_SPLIT: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("cannot train on an empty dataset")]
    EmptyDataset,
    #[error("feature vector has {actual} values, model expects {expected}")]
    FeatureArityMismatch { expected: usize, actual: usize },
    #[error("{samples} samples but {labels} labels")]
    LabelCountMismatch { samples: usize, labels: usize },
}

/// CART-style binary classification tree over numeric feature vectors.
///
/// Training recursively partitions the samples, choosing at each node the
/// split with the greatest Gini impurity reduction; candidate thresholds
/// are the midpoints between sorted unique observed values per feature. A
/// node becomes a leaf when it is pure, holds fewer than
/// [`MIN_SAMPLES_SPLIT`] samples, or no split reduces impurity; there is
/// no depth cap. All tie-breaks are deterministic: equal-merit splits
/// resolve to the lowest feature index then the lowest threshold, and
/// leaf majority ties resolve to [`Label::No`]. Trees are immutable after
/// training and round-trip through serde unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    n_features: usize,
    root: TreeNode,
}

impl DecisionTree {
    pub fn fit(samples: &[Vec<f64>], labels: &[Label]) -> Result<Self, TreeError> {
        if samples.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        if samples.len() != labels.len() {
            return Err(TreeError::LabelCountMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }

        let n_features = samples[0].len();
        for row in samples {
            if row.len() != n_features {
                return Err(TreeError::FeatureArityMismatch {
                    expected: n_features,
                    actual: row.len(),
                });
            }
        }

        let indices: Vec<usize> = (0..samples.len()).collect();
        let root = Self::build_node(samples, labels, &indices);
        Ok(Self { n_features, root })
    }

    fn build_node(samples: &[Vec<f64>], labels: &[Label], indices: &[usize]) -> TreeNode {
        let counts = class_counts(labels, indices);
        if counts[0] == 0 || counts[1] == 0 || indices.len() < MIN_SAMPLES_SPLIT {
            return Self::leaf(counts);
        }

        let Some(split) = best_split(samples, labels, indices) else {
            return Self::leaf(counts);
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| samples[i][split.feature] <= split.threshold);

        TreeNode::Split {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(Self::build_node(samples, labels, &left)),
            right: Box::new(Self::build_node(samples, labels, &right)),
        }
    }

    fn leaf(counts: [usize; 2]) -> TreeNode {
        // Majority vote; ties go to the conservative answer.
        let label = if counts[0] > counts[1] {
            Label::Yes
        } else {
            Label::No
        };
        TreeNode::Leaf { label, counts }
    }

    /// Descends from the root applying each threshold test until a leaf.
    ///
    /// Values outside the training range follow the ordinary `<=`
    /// comparisons; only a wrong arity is rejected.
    pub fn predict(&self, sample: &[f64]) -> Result<Label, TreeError> {
        if sample.len() != self.n_features {
            return Err(TreeError::FeatureArityMismatch {
                expected: self.n_features,
                actual: sample.len(),
            });
        }

        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if sample[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
                TreeNode::Leaf { label, .. } => return Ok(*label),
            }
        }
    }

    pub fn num_features(&self) -> usize {
        self.n_features
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }
}
