//! Topic listing.

use crate::error::AppError;
use crate::response::success;
use crate::service::NewsRepository;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api/topics
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = NewsRepository::fetch_topics(&state.pool).await?;
    Ok(success("topics", topics))
}
