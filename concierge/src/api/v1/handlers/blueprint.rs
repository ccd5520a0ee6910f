//! v1 Blueprint handler: the full weather + events + preferences composition.

use axum::extract::{Query, State};

use crate::api::v1::dto::{BlueprintData, BlueprintQuery};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `GET /api/v1/blueprint?guest=<display name>`
///
/// Unavailable weather is not an HTTP error: the payload carries
/// `weather: null` and the engine's single System Error recommendation.
#[utoipa::path(
    get,
    path = "/api/v1/blueprint",
    tag = "blueprint",
    operation_id = "blueprint.get",
    params(BlueprintQuery),
    responses(
        (status = 200, description = "Personalized stay blueprint", body = BlueprintData),
        (status = 400, description = "Missing guest parameter", body = ApiError),
        (status = 404, description = "Unknown guest", body = ApiError),
    )
)]
pub async fn get_blueprint(
    State(state): State<AppState>,
    Query(query): Query<BlueprintQuery>,
) -> ApiResponse<BlueprintData> {
    let Some(guest) = query.guest.filter(|name| !name.trim().is_empty()) else {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "Missing required query parameter 'guest'",
        );
    };

    match state.blueprint.build(&guest).await {
        Ok(blueprint) => ApiResponse::success(BlueprintData::from(blueprint)),
        Err(error) => error.into(),
    }
}
