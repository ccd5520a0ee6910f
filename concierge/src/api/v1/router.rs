use axum::{routing::get, Router};

use crate::api::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/guests", get(handlers::guests::list_guests))
        .route("/blueprint", get(handlers::blueprint::get_blueprint))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
}
