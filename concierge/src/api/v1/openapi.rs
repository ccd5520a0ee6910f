use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Concierge API",
        version = "1.0.0",
        description = "Hospitality amenity recommender. Combines live weather, local events, and guest preferences into a personalized stay blueprint.",
    ),
    paths(
        handlers::health::health_check,
        handlers::guests::list_guests,
        handlers::blueprint::get_blueprint,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Guests
        dto::guests::GuestData,
        dto::guests::GuestListData,
        // Blueprint
        dto::blueprint::WeatherMetricsData,
        dto::blueprint::RecommendationData,
        dto::blueprint::BlueprintData,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::LocationStatus,
        handlers::health::WeatherUpstreamStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "guests", description = "Selectable guest profiles"),
        (name = "blueprint", description = "Personalized stay blueprint"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
