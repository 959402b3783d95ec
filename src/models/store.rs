use crate::classifiers::decision_tree::DecisionTree;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Error, ErrorKind};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter};
use tempfile::NamedTempFile;

/// The two independent prediction tasks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Target {
    Jacket,
    Umbrella,
}

impl Target {
    pub fn artifact_name(self) -> &'static str {
        match self {
            Target::Jacket => "jacket.model",
            Target::Umbrella => "umbrella.model",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no trained model for target '{0}'")]
    ModelNotFound(Target),
    #[error(transparent)]
    Io(#[from] Error),
    #[error("model artifact for '{target}' is unreadable: {source}")]
    Serde {
        target: Target,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed store for trained models, one artifact per target.
///
/// Saves go through a temp file in the same directory followed by an
/// atomic rename, so a concurrent reader never observes a partially
/// written artifact and a failed save leaves the prior one in place.
#[derive(Debug, Clone)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, target: Target) -> PathBuf {
        self.dir.join(target.artifact_name())
    }

    pub fn save(&self, target: Target, model: &DecisionTree) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;

        let tmp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer(&tmp, model).map_err(|source| StoreError::Serde { target, source })?;
        tmp.persist(self.path_for(target)).map_err(|e| e.error)?;

        tracing::debug!(%target, dir = %self.dir.display(), "model artifact saved");
        Ok(())
    }

    pub fn load(&self, target: Target) -> Result<DecisionTree, StoreError> {
        let path = self.path_for(target);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::ModelNotFound(target));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::Serde { target, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Label;
    use std::fs;
    use strum::IntoEnumIterator;
    use tempfile::tempdir;

    fn trained_tree() -> DecisionTree {
        let samples = vec![vec![1.0, 0.0], vec![2.0, 0.0], vec![10.0, 1.0], vec![11.0, 1.0]];
        let labels = vec![Label::No, Label::No, Label::Yes, Label::Yes];
        DecisionTree::fit(&samples, &labels).expect("fit")
    }

    #[test]
    fn save_then_load_round_trips_every_target() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let tree = trained_tree();

        for target in Target::iter() {
            store.save(target, &tree).unwrap();
            let loaded = store.load(target).unwrap();
            assert_eq!(loaded, tree);
            assert_eq!(
                loaded.predict(&[1.5, 0.0]).unwrap(),
                tree.predict(&[1.5, 0.0]).unwrap()
            );
        }
    }

    #[test]
    fn save_creates_the_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("models");
        let store = ModelStore::new(&nested);

        store.save(Target::Jacket, &trained_tree()).unwrap();
        assert!(nested.join("jacket.model").exists());
    }

    #[test]
    fn missing_artifact_is_model_not_found() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let err = store.load(Target::Umbrella).unwrap_err();
        assert!(matches!(err, StoreError::ModelNotFound(Target::Umbrella)));
    }

    #[test]
    fn corrupt_artifact_is_a_serde_error() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        fs::write(store.path_for(Target::Jacket), "not json").unwrap();

        let err = store.load(Target::Jacket).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Serde {
                target: Target::Jacket,
                ..
            }
        ));
    }

    #[test]
    fn resave_replaces_the_artifact_whole() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let first = trained_tree();
        store.save(Target::Jacket, &first).unwrap();

        let samples = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let labels = vec![Label::Yes; 2];
        let second = DecisionTree::fit(&samples, &labels).unwrap();
        store.save(Target::Jacket, &second).unwrap();

        assert_eq!(store.load(Target::Jacket).unwrap(), second);
        // Nothing but the artifact remains in the directory.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn artifact_names_are_stable() {
        assert_eq!(Target::Jacket.artifact_name(), "jacket.model");
        assert_eq!(Target::Umbrella.artifact_name(), "umbrella.model");
        assert_eq!(Target::Jacket.to_string(), "jacket");
    }
}
