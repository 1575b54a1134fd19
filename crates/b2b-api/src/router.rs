use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use utoipa::OpenApi as OpenApiT;

use crate::{AppState, handlers};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();

    // Group partner-related endpoints under a dedicated "/partners" router
    let partners_router = Router::new()
        .route("/", get(handlers::list_partners))
        .route("/{short_name}", get(handlers::get_partner))
        .route("/{short_name}/metrics", get(handlers::get_partner_metrics));

    Router::new()
        .route("/health", get(health))
        .nest("/v1/partners", partners_router)
        .route(
            "/v1/docs/openapi.json",
            get(move || async move { Json(open_api) }),
        )
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
