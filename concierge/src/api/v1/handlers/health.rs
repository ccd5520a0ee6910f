use axum::extract::State;
use serde::Serialize;

use crate::api::v1::response::ApiResponse;
use crate::api::AppState;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub location: LocationStatus,
    pub weather: WeatherUpstreamStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LocationStatus {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct WeatherUpstreamStatus {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        location: LocationStatus {
            name: state.config.location.name.clone(),
            latitude: state.config.location.latitude,
            longitude: state.config.location.longitude,
        },
        weather: WeatherUpstreamStatus {
            base_url: state.config.weather.base_url.clone(),
            timeout_secs: state.config.weather.timeout_secs,
        },
    })
}
