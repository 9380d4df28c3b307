//! Static endpoint document and the catch-all 404.

use crate::error::AppError;
use crate::response::success;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api
pub async fn get_endpoints(State(state): State<AppState>) -> impl IntoResponse {
    success("endpoints", state.endpoints.as_ref().clone())
}

/// Router fallback for any unmatched method or path.
pub async fn path_not_found() -> AppError {
    AppError::PathNotFound
}
