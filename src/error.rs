//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// SQLSTATE codes the store reports for rejected input.
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("seed data: {0}")]
    SeedData(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Bad Request")]
    MalformedInput,
    #[error("Invalid Sort Query")]
    InvalidSort,
    #[error("Topic Not Found")]
    UnknownTopic,
    #[error("{entity} Not Found")]
    UnknownReference { entity: &'static str },
    #[error("{entity} Not Found")]
    NotFound { entity: &'static str },
    #[error("path not found")]
    PathNotFound,
    #[error("Internal Server Error")]
    UnhandledFault,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput | AppError::InvalidSort => StatusCode::BAD_REQUEST,
            AppError::UnknownTopic
            | AppError::UnknownReference { .. }
            | AppError::NotFound { .. }
            | AppError::PathNotFound => StatusCode::NOT_FOUND,
            AppError::UnhandledFault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { msg: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

/// Entity named by a violated foreign key, e.g. `comments_author_fkey` -> User.
fn referenced_entity(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(c) if c.ends_with("_author_fkey") => "User",
        Some(c) if c.ends_with("_article_id_fkey") => "Article",
        Some(c) if c.ends_with("_topic_fkey") => "Topic",
        _ => "Resource",
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            match db.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    return AppError::UnknownReference {
                        entity: referenced_entity(db.constraint()),
                    };
                }
                Some(NOT_NULL_VIOLATION)
                | Some(INVALID_TEXT_REPRESENTATION)
                | Some(NUMERIC_VALUE_OUT_OF_RANGE) => return AppError::MalformedInput,
                _ => {}
            }
        }
        tracing::error!(error = %e, "unhandled database error");
        AppError::UnhandledFault
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected json body");
        AppError::MalformedInput
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected query string");
        AppError::MalformedInput
    }
}
