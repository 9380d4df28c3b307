//! User listing.

use crate::error::AppError;
use crate::response::success;
use crate::service::NewsRepository;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api/users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = NewsRepository::fetch_users(&state.pool).await?;
    Ok(success("users", users))
}
