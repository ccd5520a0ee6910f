use std::time::Duration;

use serde::Deserialize;

use crate::config::{LocationConfig, WeatherConfig};
use crate::error::{ConciergeError, Result};
use crate::models::{CurrentWeather, WeatherSnapshot};

/// Open-Meteo `current_weather` payload. Field names follow the provider's
/// wire format, not ours.
#[derive(Debug, Deserialize)]
struct CurrentWeatherPayload {
    temperature: f64,
    weathercode: u32,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeatherPayload>,
}

/// Client for the Open-Meteo forecast endpoint.
///
/// One request per invocation, no retries. Every failure mode — transport
/// error, timeout, non-2xx status, missing or malformed fields — collapses
/// to [`CurrentWeather::Unavailable`] at the public boundary.
#[derive(Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
}

impl WeatherClient {
    pub fn new(weather: &WeatherConfig, location: &LocationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(weather.timeout_secs))
            .build()
            .map_err(|error| {
                ConciergeError::Internal(format!("Failed to create weather HTTP client: {error}"))
            })?;

        Ok(Self {
            client,
            base_url: weather.base_url.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        })
    }

    /// Fetch the current observation for the configured location.
    pub async fn current(&self) -> CurrentWeather {
        match self.fetch().await {
            Ok(snapshot) => CurrentWeather::Available(snapshot),
            Err(error) => {
                tracing::warn!("Weather fetch failed, treating as unavailable: {}", error);
                CurrentWeather::Unavailable
            }
        }
    }

    async fn fetch(&self) -> Result<WeatherSnapshot> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ForecastResponse = response.json().await?;

        let current = body.current_weather.ok_or_else(|| {
            ConciergeError::WeatherUpstream(
                "forecast payload is missing current_weather".to_string(),
            )
        })?;

        Ok(WeatherSnapshot {
            temperature: current.temperature,
            weather_code: current.weathercode,
            wind_speed: current.windspeed,
        })
    }
}
