//! Feature extraction: the deterministic mapping from raw weather fields
//! to model inputs, identical for current readings and forecast days so
//! one model can score both.

use crate::core::{Condition, FeatureVector, round1};
use crate::weather::types::{CurrentWeather, DailyWeather, HourlyWeather};
use chrono::NaiveDate;
use serde::Serialize;

pub const MAX_FORECAST_DAYS: usize = 7;

/// One forecast day reduced to model inputs, plus the raw aggregates the
/// presentation layer shows. Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub precipitation_sum: f64,
    pub features: FeatureVector,
}

/// Feature vector for the current reading.
///
/// Precipitation probability prefers the first entry of the hourly
/// series; with no series, a positive current precipitation amount is
/// estimated as `min(100, round(amount * 50))`, else 0.
pub fn extract_current(current: &CurrentWeather, hourly: Option<&HourlyWeather>) -> FeatureVector {
    let precip = match hourly.map(|h| h.precipitation_probability.as_slice()) {
        Some([first, ..]) => *first,
        _ if current.precipitation > 0.0 => (current.precipitation * 50.0).round().min(100.0),
        _ => 0.0,
    };

    FeatureVector {
        temp: round1(current.temperature),
        humidity: current.relative_humidity,
        wind: round1(current.wind_speed),
        precip,
        condition: Condition::from_wmo_code(current.weather_code),
    }
}

/// Per-day feature vectors, at most [`MAX_FORECAST_DAYS`] of them.
///
/// The day's temperature is the mean of max and min; humidity and wind
/// are the daily maxima. Precipitation probability uses the daily
/// maximum when present, else `min(100, round(sum * 20))` for a positive
/// precipitation sum, else 0. Per-day values missing from their arrays
/// default to 0.
pub fn extract_daily(daily: &DailyWeather) -> Vec<ForecastDay> {
    let count = daily.time.len().min(MAX_FORECAST_DAYS);
    let mut days = Vec::with_capacity(count);

    for i in 0..count {
        let at = |xs: &[f64]| xs.get(i).copied().unwrap_or(0.0);

        let temp_max = at(&daily.temperature_max);
        let temp_min = at(&daily.temperature_min);
        let precipitation_sum = at(&daily.precipitation_sum);

        let precip = match daily.precipitation_probability_max.get(i) {
            Some(&p) => p,
            None if precipitation_sum > 0.0 => (precipitation_sum * 20.0).round().min(100.0),
            None => 0.0,
        };

        days.push(ForecastDay {
            date: daily.time[i],
            temp_max,
            temp_min,
            precipitation_sum,
            features: FeatureVector {
                temp: round1((temp_max + temp_min) / 2.0),
                humidity: at(&daily.relative_humidity_max),
                wind: round1(at(&daily.wind_speed_max)),
                precip,
                condition: Condition::from_wmo_code(daily.weather_code.get(i).copied().unwrap_or(0)),
            },
        });
    }

    days
}
