mod dataset;

pub use dataset::{LabeledDataset, MIN_FIELDS};
