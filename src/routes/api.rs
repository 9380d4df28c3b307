//! `/api` routes.

use crate::handlers::{
    delete_comment, get_article_by_id, get_articles, get_comments_by_article_id, get_endpoints,
    get_topics, get_users, patch_article, path_not_found, post_comment_by_article_id,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

/// A known path hit with an unsupported method answers like an unknown path.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(get_endpoints).fallback(path_not_found))
        .route("/api/topics", get(get_topics).fallback(path_not_found))
        .route("/api/articles", get(get_articles).fallback(path_not_found))
        .route(
            "/api/articles/:article_id",
            get(get_article_by_id)
                .patch(patch_article)
                .fallback(path_not_found),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_comments_by_article_id)
                .post(post_comment_by_article_id)
                .fallback(path_not_found),
        )
        .route(
            "/api/comments/:comment_id",
            delete(delete_comment).fallback(path_not_found),
        )
        .route("/api/users", get(get_users).fallback(path_not_found))
}
