use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Number of model inputs. Training and inference share this schema; a
/// vector of any other arity is rejected by the classifier.
pub const FEATURE_COUNT: usize = 5;

/// Sky/precipitation bucket derived from a WMO weather code.
///
/// The discriminant is the numeric value fed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Condition {
    Sunny = 0,
    Cloudy = 1,
    Rain = 2,
    Snow = 3,
}

impl Condition {
    /// Maps a WMO interpretation code to a bucket.
    ///
    /// Ranges are checked snow first, then rain, then cloudy; anything
    /// outside them (including negative or unknown codes) is sunny.
    pub fn from_wmo_code(code: i64) -> Self {
        if (71..=77).contains(&code) {
            Condition::Snow
        } else if (51..=67).contains(&code) || (80..=99).contains(&code) {
            Condition::Rain
        } else if (4..=49).contains(&code) {
            Condition::Cloudy
        } else {
            Condition::Sunny
        }
    }

    pub fn as_f64(self) -> f64 {
        self as i64 as f64
    }
}

/// One model input: the five readings, in the fixed column order shared
/// by the training dataset and the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Air temperature, °C, rounded to 1 decimal.
    pub temp: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Wind speed, km/h, rounded to 1 decimal.
    pub wind: f64,
    /// Precipitation probability, percent.
    pub precip: f64,
    pub condition: Condition,
}

impl FeatureVector {
    pub fn to_sample(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temp,
            self.humidity,
            self.wind,
            self.precip,
            self.condition.as_f64(),
        ]
    }
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
