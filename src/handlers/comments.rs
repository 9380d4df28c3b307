//! Comment handlers.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::service::NewsRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

/// DELETE /api/comments/:comment_id -> 204, or 404 when already gone.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let comment_id = parse_id(&id_str)?;
    NewsRepository::delete_comment(&state.pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
