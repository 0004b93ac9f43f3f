use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{Offers, Orders, Users};

use crate::openapi;
use crate::state::AppState;

pub mod records;

pub const INDEX_TEXT: &str = "main page";

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness text", body = String)))]
pub async fn index() -> &'static str {
    INDEX_TEXT
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::api_doc())
}

/// Build the full application router: liveness, docs and the three record collections.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json));

    public
        .merge(records::record_routes::<Users>())
        .merge(records::record_routes::<Orders>())
        .merge(records::record_routes::<Offers>())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
