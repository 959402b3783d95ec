mod recommend;
mod train;

pub use recommend::{Advice, DayAdvice, Recommendation, Recommender};
pub use train::{SavedModel, TrainError, TrainingReport, train_models};
