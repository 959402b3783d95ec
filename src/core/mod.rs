mod features;
mod label;

pub use features::{Condition, FEATURE_COUNT, FeatureVector};
pub use label::Label;

pub(crate) use features::round1;
