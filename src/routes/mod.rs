use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{make_span_with_request_id, request_id_middleware},
    services::YouTubeApi,
};

pub mod channels;
pub mod playlist_search;
pub mod playlists;

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub youtube: Arc<dyn YouTubeApi>,
}

impl AppState {
    pub fn new(youtube: Arc<dyn YouTubeApi>) -> Self {
        Self { youtube }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/channels", get(channels::list))
        .route("/playlists", get(playlists::list))
        .route("/playlist-search", get(playlist_search::search))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
