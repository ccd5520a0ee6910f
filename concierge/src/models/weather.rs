use serde::{Deserialize, Serialize};

/// A single live weather observation for the configured location.
///
/// Always fully populated: the weather client never yields a partial
/// snapshot. Absence of weather is modeled by [`CurrentWeather::Unavailable`],
/// not by optional fields here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Provider condition code; `> 50` is treated as rain-equivalent.
    pub weather_code: u32,
    /// Wind speed in km/h.
    pub wind_speed: f64,
}

impl WeatherSnapshot {
    /// Display-only condition label. Independent of the recommendation
    /// rules and must not feed back into them.
    pub fn condition_label(&self) -> &'static str {
        if self.weather_code > 50 {
            "Raining"
        } else if self.weather_code <= 3 {
            "Clear"
        } else {
            "Clear/Cloudy"
        }
    }
}

/// Outcome of a weather fetch.
///
/// The recommendation engine branches on this sum type rather than a
/// nullable snapshot, so the unavailable short-circuit is enforced by
/// the type system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrentWeather {
    Available(WeatherSnapshot),
    Unavailable,
}

impl CurrentWeather {
    pub fn is_available(&self) -> bool {
        matches!(self, CurrentWeather::Available(_))
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            CurrentWeather::Available(snapshot) => Some(snapshot),
            CurrentWeather::Unavailable => None,
        }
    }
}
