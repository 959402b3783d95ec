use crate::weather::types::{
    ForecastResponse, GeocodingResponse, ResolvedLocation, WeatherError, WeatherReport,
};
use reqwest::Client;
use std::time::Duration;

/// Open-Meteo geocoding endpoint (city name to coordinates).
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Open-Meteo forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const REQUEST_TIMEOUT_SECS: u64 = 10;

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,relative_humidity_2m_max,\
                            wind_speed_10m_max,precipitation_sum,precipitation_probability_max,\
                            weather_code";
const HOURLY_FIELDS: &str = "precipitation_probability";

/// Thin Open-Meteo client: one geocoding call to resolve the city, then
/// one forecast call for current plus daily data. No retries; each
/// request is bounded by a 10 s timeout.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_urls(GEOCODING_URL, FORECAST_URL)
    }

    /// Endpoint override for tests and self-hosted mirrors.
    pub fn with_urls(
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        })
    }

    /// Resolves the city and fetches its current + 7-day weather.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let location = self.geocode(city).await?;
        tracing::info!(city, resolved = %location.display_name(), "location resolved");

        let forecast = self.forecast(&location).await?;
        Ok(WeatherReport {
            location,
            current: forecast.current,
            hourly: forecast.hourly,
            daily: forecast.daily,
        })
    }

    async fn geocode(&self, city: &str) -> Result<ResolvedLocation, WeatherError> {
        tracing::debug!(city, "resolving coordinates");
        let response = self
            .http
            .get(&self.geocoding_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::GeocodingApi {
                status: response.status().as_u16(),
            });
        }

        let body: GeocodingResponse = response.json().await?;
        let Some(place) = body.results.into_iter().next() else {
            return Err(WeatherError::CityNotFound);
        };

        Ok(ResolvedLocation {
            name: place.name,
            country: place.country,
            latitude: place.latitude,
            longitude: place.longitude,
        })
    }

    async fn forecast(&self, location: &ResolvedLocation) -> Result<ForecastResponse, WeatherError> {
        tracing::debug!(
            lat = location.latitude,
            lon = location.longitude,
            "fetching forecast"
        );
        let response = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", location.latitude.to_string().as_str()),
                ("longitude", location.longitude.to_string().as_str()),
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("hourly", HOURLY_FIELDS),
                ("forecast_days", "7"),
                ("timezone", "auto"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::ForecastApi {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
