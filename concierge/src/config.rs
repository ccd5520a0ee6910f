use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub weather: WeatherConfig,
    pub location: LocationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Weather upstream (Open-Meteo compatible) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub base_url: String,
    /// Bounded per-request timeout; a timed-out fetch is treated as
    /// weather-unavailable, never retried.
    pub timeout_secs: u64,
}

/// The single deployment location whose weather drives recommendations.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("CONCIERGE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("CONCIERGE_PORT", 3000),
            },
            weather: WeatherConfig {
                base_url: env::var("WEATHER_BASE_URL")
                    .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string()),
                timeout_secs: parse_env_or("WEATHER_TIMEOUT_SECS", 5),
            },
            location: LocationConfig {
                name: env::var("LOCATION_NAME").unwrap_or_else(|_| "Amravati".to_string()),
                latitude: parse_env_or("LOCATION_LATITUDE", 20.93),
                longitude: parse_env_or("LOCATION_LONGITUDE", 77.75),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_open_meteo() {
        let config = Config::from_env();
        assert!(config.weather.base_url.contains("open-meteo"));
        assert!(config.weather.timeout_secs > 0);
    }
}
