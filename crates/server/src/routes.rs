use std::sync::Arc;

use axum::{
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, Level};

use common::types::Health;
use service::ads::{AdRepository, AdService};

use crate::errors::{JsonApiError, URL_NOT_FOUND};

pub mod ads;

/// Shared handler state. Cloned per request; the service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub ads: Arc<AdService<dyn AdRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn AdRepository>) -> Self {
        Self { ads: Arc::new(AdService::new(repo)) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn fallback(uri: Uri) -> JsonApiError {
    debug!(%uri, "no route matched");
    JsonApiError::not_found(URL_NOT_FOUND)
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ads", post(ads::create_ad))
        .route("/ads/:id", get(ads::get_ad).delete(ads::delete_ad))
        .fallback(fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
