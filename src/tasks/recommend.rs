use crate::classifiers::decision_tree::{DecisionTree, TreeError};
use crate::core::{FeatureVector, Label};
use crate::models::{ModelStore, StoreError, Target};
use crate::weather::{ForecastDay, ResolvedLocation, WeatherReport, extract_current, extract_daily};
use serde::Serialize;

/// Jacket/umbrella answer for one feature vector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Advice {
    pub jacket: Label,
    pub umbrella: Label,
}

/// One scored forecast day.
#[derive(Debug, Clone, Serialize)]
pub struct DayAdvice {
    #[serde(flatten)]
    pub day: ForecastDay,
    pub advice: Advice,
}

/// Current + per-day recommendations for one location.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub location: ResolvedLocation,
    pub current_features: FeatureVector,
    pub current: Advice,
    pub forecast: Vec<DayAdvice>,
}

impl Recommendation {
    /// 1-based forecast day numbers where the target is needed, for the
    /// summary line.
    pub fn days_needing(&self, target: Target) -> Vec<usize> {
        self.forecast
            .iter()
            .enumerate()
            .filter(|(_, d)| {
                match target {
                    Target::Jacket => d.advice.jacket,
                    Target::Umbrella => d.advice.umbrella,
                }
                .is_yes()
            })
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// Loads both trained trees once and serves read-only predictions.
///
/// Construction fails with [`StoreError::ModelNotFound`] when either
/// artifact is missing; callers treat that as "cannot serve predictions"
/// rather than retrying per request. The loaded trees are never mutated,
/// so one instance may be shared freely across requests.
#[derive(Debug)]
pub struct Recommender {
    jacket: DecisionTree,
    umbrella: DecisionTree,
}

impl Recommender {
    pub fn load(store: &ModelStore) -> Result<Self, StoreError> {
        Ok(Self {
            jacket: store.load(Target::Jacket)?,
            umbrella: store.load(Target::Umbrella)?,
        })
    }

    pub fn from_trees(jacket: DecisionTree, umbrella: DecisionTree) -> Self {
        Self { jacket, umbrella }
    }

    pub fn predict(&self, target: Target, sample: &[f64]) -> Result<Label, TreeError> {
        match target {
            Target::Jacket => self.jacket.predict(sample),
            Target::Umbrella => self.umbrella.predict(sample),
        }
    }

    pub fn advise(&self, sample: &[f64]) -> Result<Advice, TreeError> {
        Ok(Advice {
            jacket: self.predict(Target::Jacket, sample)?,
            umbrella: self.predict(Target::Umbrella, sample)?,
        })
    }

    /// Scores the current reading plus every forecast day: one current
    /// vector and up to seven daily vectors, two tree traversals each.
    pub fn advise_report(&self, report: &WeatherReport) -> Result<Recommendation, TreeError> {
        let current_features = extract_current(&report.current, report.hourly.as_ref());
        let current = self.advise(&current_features.to_sample())?;

        let mut forecast = Vec::new();
        if let Some(daily) = &report.daily {
            for day in extract_daily(daily) {
                let advice = self.advise(&day.features.to_sample())?;
                forecast.push(DayAdvice { day, advice });
            }
        }

        Ok(Recommendation {
            location: report.location.clone(),
            current_features,
            current,
            forecast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{CurrentWeather, DailyWeather};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn wet_dry_trees() -> (DecisionTree, DecisionTree) {
        let mut samples = Vec::new();
        let mut yes_no = Vec::new();
        for _ in 0..10 {
            samples.push(vec![20.0, 80.0, 10.0, 90.0, 2.0]);
            yes_no.push(Label::Yes);
        }
        for _ in 0..10 {
            samples.push(vec![30.0, 20.0, 5.0, 0.0, 0.0]);
            yes_no.push(Label::No);
        }
        let tree = DecisionTree::fit(&samples, &yes_no).expect("fit");
        (tree.clone(), tree)
    }

    fn report(current_temp: f64) -> WeatherReport {
        WeatherReport {
            location: ResolvedLocation {
                name: "Manila".into(),
                country: "Philippines".into(),
                latitude: 14.6,
                longitude: 121.0,
            },
            current: CurrentWeather {
                temperature: current_temp,
                relative_humidity: 80.0,
                wind_speed: 10.0,
                precipitation: 0.0,
                weather_code: 61,
            },
            hourly: None,
            daily: Some(DailyWeather {
                time: vec![
                    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                    NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
                ],
                temperature_max: vec![25.0, 35.0],
                temperature_min: vec![15.0, 25.0],
                relative_humidity_max: vec![80.0, 20.0],
                wind_speed_max: vec![10.0, 5.0],
                precipitation_sum: vec![0.0, 0.0],
                precipitation_probability_max: vec![90.0, 0.0],
                weather_code: vec![61, 0],
            }),
        }
    }

    #[test]
    fn load_fails_when_an_artifact_is_missing() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path());

        let err = Recommender::load(&store).unwrap_err();
        assert!(matches!(err, StoreError::ModelNotFound(Target::Jacket)));

        // One artifact is not enough.
        let (jacket, _) = wet_dry_trees();
        store.save(Target::Jacket, &jacket).unwrap();
        let err = Recommender::load(&store).unwrap_err();
        assert!(matches!(err, StoreError::ModelNotFound(Target::Umbrella)));
    }

    #[test]
    fn advise_report_scores_current_and_every_day() {
        let (jacket, umbrella) = wet_dry_trees();
        let recommender = Recommender::from_trees(jacket, umbrella);

        // Current reading matches the wet prototype (20 °C, 80 %, rain).
        let rec = recommender.advise_report(&report(20.0)).unwrap();
        assert!(rec.current.jacket.is_yes());
        assert!(rec.current.umbrella.is_yes());

        assert_eq!(rec.forecast.len(), 2);
        // Day 1 averages to the wet prototype, day 2 to the dry one.
        assert!(rec.forecast[0].advice.jacket.is_yes());
        assert!(!rec.forecast[1].advice.jacket.is_yes());

        assert_eq!(rec.days_needing(Target::Jacket), vec![1]);
        assert_eq!(rec.days_needing(Target::Umbrella), vec![1]);
    }

    #[test]
    fn advise_report_without_daily_data_has_no_forecast() {
        let (jacket, umbrella) = wet_dry_trees();
        let recommender = Recommender::from_trees(jacket, umbrella);

        let mut r = report(30.0);
        r.current.relative_humidity = 20.0;
        r.current.wind_speed = 5.0;
        r.current.weather_code = 0;
        r.daily = None;

        let rec = recommender.advise_report(&r).unwrap();
        assert!(!rec.current.jacket.is_yes());
        assert!(rec.forecast.is_empty());
        assert!(rec.days_needing(Target::Jacket).is_empty());
    }

    #[test]
    fn predict_routes_to_the_right_tree() {
        let wet = [20.0, 80.0, 10.0, 90.0, 2.0];
        let (jacket, umbrella) = wet_dry_trees();
        let recommender = Recommender::from_trees(jacket, umbrella);

        assert_eq!(
            recommender.predict(Target::Jacket, &wet).unwrap(),
            Label::Yes
        );
        assert_eq!(
            recommender.predict(Target::Umbrella, &wet).unwrap(),
            Label::Yes
        );

        let err = recommender.predict(Target::Jacket, &wet[..4]).unwrap_err();
        assert!(matches!(err, TreeError::FeatureArityMismatch { .. }));
    }
}
