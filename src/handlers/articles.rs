//! Article handlers: listing, single fetch, vote patch, and the article's comments.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::response::{created, success};
use crate::service::{NewsRepository, PayloadValidator};
use crate::sql::ArticleListQuery;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// GET /api/articles?topic=&sort_by=&order=
pub async fn get_articles(
    State(state): State<AppState>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let known_topics: HashSet<String> = NewsRepository::fetch_topics(&state.pool)
        .await?
        .into_iter()
        .map(|t| t.slug)
        .collect();
    let query = ArticleListQuery::new(
        &known_topics,
        params.topic.as_deref(),
        params.sort_by.as_deref(),
        params.order.as_deref(),
    )?;
    let articles = NewsRepository::list_articles(&state.pool, &query.build()).await?;
    Ok(success("articles", articles))
}

/// GET /api/articles/:article_id -> `{ article: [record] }`
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&id_str)?;
    let article = NewsRepository::fetch_article_by_id(&state.pool, article_id).await?;
    Ok(success("article", vec![article]))
}

/// PATCH /api/articles/:article_id with `{ inc_votes }`
pub async fn patch_article(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&id_str)?;
    let Json(payload) = payload?;
    let patch = PayloadValidator::vote_patch(&payload)?;
    let article = NewsRepository::patch_article_votes(&state.pool, article_id, patch).await?;
    Ok(success("patchedArticle", article))
}

/// GET /api/articles/:article_id/comments
pub async fn get_comments_by_article_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&id_str)?;
    // Missing article is a 404, not an empty list.
    NewsRepository::fetch_article_by_id(&state.pool, article_id).await?;
    let comments = NewsRepository::list_comments_by_article(&state.pool, article_id).await?;
    Ok(success("comments", comments))
}

/// POST /api/articles/:article_id/comments with `{ username, body }`
pub async fn post_comment_by_article_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&id_str)?;
    let Json(payload) = payload?;
    let comment = PayloadValidator::new_comment(&payload)?;
    NewsRepository::fetch_article_by_id(&state.pool, article_id).await?;
    let inserted = NewsRepository::insert_comment(&state.pool, article_id, &comment).await?;
    Ok(created("comment", inserted))
}
