//! Shared application state for all routes.

use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;

/// Endpoint document served by `GET /api`, embedded at build time.
pub const ENDPOINTS_JSON: &str = include_str!("../endpoints.json");

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub endpoints: Arc<Value>,
}

impl AppState {
    /// Parses the embedded endpoint document once.
    pub fn new(pool: PgPool) -> Result<Self, serde_json::Error> {
        let endpoints: Value = serde_json::from_str(ENDPOINTS_JSON)?;
        Ok(AppState {
            pool,
            endpoints: Arc::new(endpoints),
        })
    }
}
