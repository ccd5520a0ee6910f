//! v1 Guest registry handlers.

use axum::extract::State;

use crate::api::v1::dto::{GuestData, GuestListData};
use crate::api::v1::response::ApiResponse;
use crate::api::AppState;

/// `GET /api/v1/guests`
#[utoipa::path(
    get,
    path = "/api/v1/guests",
    tag = "guests",
    operation_id = "guests.list",
    responses(
        (status = 200, description = "All selectable guest profiles", body = GuestListData),
    )
)]
pub async fn list_guests(State(state): State<AppState>) -> ApiResponse<GuestListData> {
    let guests = state
        .guests
        .profiles()
        .iter()
        .map(GuestData::from)
        .collect();

    ApiResponse::success(GuestListData { guests })
}
