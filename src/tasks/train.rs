use crate::classifiers::decision_tree::{DecisionTree, TreeError};
use crate::models::{ModelStore, StoreError, Target};
use crate::streams::LabeledDataset;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("failed to read dataset: {0}")]
    Dataset(#[from] std::io::Error),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedModel {
    pub target: Target,
    pub path: PathBuf,
}

/// Outcome of one training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub samples_used: usize,
    pub rows_skipped: usize,
    pub saved: Vec<SavedModel>,
}

/// Trains both targets from one labeled dataset and persists the trees.
///
/// Both trees are built before either artifact is written, so a failed
/// run leaves the prior artifacts in place.
pub fn train_models(dataset: &Path, store: &ModelStore) -> Result<TrainingReport, TrainError> {
    let data = LabeledDataset::from_file(dataset)?;
    tracing::info!(
        samples = data.len(),
        skipped = data.rows_skipped,
        "dataset loaded"
    );

    let jacket = DecisionTree::fit(&data.samples, &data.jacket)?;
    let umbrella = DecisionTree::fit(&data.samples, &data.umbrella)?;

    let mut saved = Vec::new();
    for (target, model) in [(Target::Jacket, &jacket), (Target::Umbrella, &umbrella)] {
        store.save(target, model)?;
        saved.push(SavedModel {
            target,
            path: store.path_for(target),
        });
        tracing::info!(%target, leaves = model.root().leaf_count(), "model trained");
    }

    Ok(TrainingReport {
        samples_used: data.len(),
        rows_skipped: data.rows_skipped,
        saved,
    })
}
