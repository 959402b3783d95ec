mod client;
mod extract;
mod types;

pub use client::{FORECAST_URL, GEOCODING_URL, WeatherClient};
pub use extract::{ForecastDay, MAX_FORECAST_DAYS, extract_current, extract_daily};
pub use types::{
    CurrentWeather, DailyWeather, ForecastResponse, GeocodedPlace, GeocodingResponse,
    HourlyWeather, ResolvedLocation, WeatherError, WeatherReport,
};
