//! Router assembly: API routes, health routes, 404 fallback and middleware.

mod api;
mod common;
pub use api::api_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::handlers::path_not_found;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application router, shared by the server binary and the integration tests.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes())
        .fallback(path_not_found)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
