//! Typed views of the Open-Meteo payloads.
//!
//! Every field the API may omit defaults instead of failing
//! deserialization; the extractor turns absent readings into zeros.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Open-Meteo geocoding response (`/v1/search`).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodedPlace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// The place a city query resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedLocation {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ResolvedLocation {
    /// "Name, Country", or just the name when the country is unknown.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Open-Meteo forecast response (`/v1/forecast`), trimmed to the fields
/// the extractor consumes.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current: CurrentWeather,
    #[serde(default)]
    pub hourly: Option<HourlyWeather>,
    #[serde(default)]
    pub daily: Option<DailyWeather>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CurrentWeather {
    #[serde(rename = "temperature_2m", default)]
    pub temperature: f64,
    #[serde(rename = "relative_humidity_2m", default)]
    pub relative_humidity: f64,
    #[serde(rename = "wind_speed_10m", default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub precipitation: f64,
    #[serde(default)]
    pub weather_code: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct HourlyWeather {
    #[serde(default)]
    pub precipitation_probability: Vec<f64>,
}

/// Daily aggregates, one entry per day, arrays aligned by index.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DailyWeather {
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    #[serde(rename = "temperature_2m_max", default)]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min", default)]
    pub temperature_min: Vec<f64>,
    #[serde(rename = "relative_humidity_2m_max", default)]
    pub relative_humidity_max: Vec<f64>,
    #[serde(rename = "wind_speed_10m_max", default)]
    pub wind_speed_max: Vec<f64>,
    #[serde(rename = "precipitation_sum", default)]
    pub precipitation_sum: Vec<f64>,
    #[serde(rename = "precipitation_probability_max", default)]
    pub precipitation_probability_max: Vec<f64>,
    #[serde(default)]
    pub weather_code: Vec<i64>,
}

/// Raw weather for one resolved location: current conditions plus up to
/// seven days of daily aggregates.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub location: ResolvedLocation,
    pub current: CurrentWeather,
    pub hourly: Option<HourlyWeather>,
    pub daily: Option<DailyWeather>,
}

/// Weather/geocoding call failures, surfaced to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("geocoding API error (HTTP {status})")]
    GeocodingApi { status: u16 },
    #[error("weather API error (HTTP {status})")]
    ForecastApi { status: u16 },
    #[error("city not found, check the city name and try again")]
    CityNotFound,
}
