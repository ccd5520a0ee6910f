use serde::{Deserialize, Serialize};

use crate::api::v1::dto::GuestData;
use crate::models::{Blueprint, Recommendation};

/// Query parameters for `GET /api/v1/blueprint`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct BlueprintQuery {
    /// Display name of the guest to personalize for.
    pub guest: Option<String>,
}

/// Weather metrics for display. Absent (`null`) when the upstream weather
/// source was unavailable; presentation renders an error state instead.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherMetricsData {
    /// Temperature in °C.
    pub temperature: f64,
    /// Derived condition label: `"Raining"`, `"Clear"`, or `"Clear/Cloudy"`.
    pub condition: String,
    /// Wind speed in km/h.
    pub wind_speed: f64,
}

/// One amenity offer, rendered top-to-bottom in sequence order.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationData {
    pub title: String,
    pub description: String,
}

impl From<Recommendation> for RecommendationData {
    fn from(rec: Recommendation) -> Self {
        Self {
            title: rec.title,
            description: rec.description,
        }
    }
}

/// `GET /api/v1/blueprint` payload: everything the presentation layer needs
/// for one guest — location header, weather metrics, events banner, and the
/// ordered recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintData {
    pub location: String,
    /// `null` when weather is unavailable; recommendations then contain the
    /// single System Error entry.
    pub weather: Option<WeatherMetricsData>,
    pub day: String,
    pub events: Vec<String>,
    pub guest: GuestData,
    pub recommendations: Vec<RecommendationData>,
}

impl From<Blueprint> for BlueprintData {
    fn from(blueprint: Blueprint) -> Self {
        let weather = blueprint.weather.snapshot().map(|snapshot| WeatherMetricsData {
            temperature: snapshot.temperature,
            condition: snapshot.condition_label().to_string(),
            wind_speed: snapshot.wind_speed,
        });

        Self {
            location: blueprint.location,
            weather,
            day: blueprint.day_name,
            events: blueprint.events,
            guest: GuestData::from(&blueprint.guest),
            recommendations: blueprint
                .recommendations
                .into_iter()
                .map(RecommendationData::from)
                .collect(),
        }
    }
}
