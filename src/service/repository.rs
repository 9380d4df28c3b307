//! Named operations against PostgreSQL. Each takes the pool explicitly and runs one statement.

use crate::error::AppError;
use crate::model::{Article, ArticleDetail, ArticleSummary, Comment, Topic, User};
use crate::service::{NewComment, VotePatch};
use crate::sql::QueryBuf;
use sqlx::PgPool;

const SELECT_ARTICLE_BY_ID: &str = "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
     articles.body, articles.created_at, articles.votes, articles.article_img_url, \
     COUNT(comments.comment_id)::INT AS comment_count \
     FROM articles \
     LEFT JOIN comments ON comments.article_id = articles.article_id \
     WHERE articles.article_id = $1 \
     GROUP BY articles.article_id";

const SELECT_COMMENTS_BY_ARTICLE: &str = "SELECT comment_id, article_id, author, body, created_at, votes \
     FROM comments WHERE article_id = $1 \
     ORDER BY created_at ASC, comment_id ASC";

const INSERT_COMMENT: &str = "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) \
     RETURNING comment_id, article_id, author, body, created_at, votes";

const UPDATE_ARTICLE_VOTES: &str = "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 \
     RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url";

const DELETE_COMMENT: &str = "DELETE FROM comments WHERE comment_id = $1";

pub struct NewsRepository;

impl NewsRepository {
    pub async fn fetch_topics(pool: &PgPool) -> Result<Vec<Topic>, AppError> {
        let sql = "SELECT slug, description FROM topics";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Topic>(sql).fetch_all(pool).await?)
    }

    /// Fails with `NotFound` when no article has this id.
    pub async fn fetch_article_by_id(pool: &PgPool, article_id: i32) -> Result<ArticleDetail, AppError> {
        tracing::debug!(sql = %SELECT_ARTICLE_BY_ID, article_id, "query");
        sqlx::query_as::<_, ArticleDetail>(SELECT_ARTICLE_BY_ID)
            .bind(article_id)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::NotFound { entity: "Article" })
    }

    /// Run a statement produced by [`crate::sql::ArticleListQuery::build`].
    pub async fn list_articles(pool: &PgPool, q: &QueryBuf) -> Result<Vec<ArticleSummary>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, ArticleSummary>(&q.sql);
        for p in &q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(pool).await?)
    }

    /// Oldest first. An article without comments yields an empty list.
    pub async fn list_comments_by_article(pool: &PgPool, article_id: i32) -> Result<Vec<Comment>, AppError> {
        tracing::debug!(sql = %SELECT_COMMENTS_BY_ARTICLE, article_id, "query");
        Ok(sqlx::query_as::<_, Comment>(SELECT_COMMENTS_BY_ARTICLE)
            .bind(article_id)
            .fetch_all(pool)
            .await?)
    }

    /// Unknown author or article surfaces as `UnknownReference` via the foreign keys.
    pub async fn insert_comment(
        pool: &PgPool,
        article_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, AppError> {
        tracing::debug!(sql = %INSERT_COMMENT, article_id, author = %comment.author, "query");
        Ok(sqlx::query_as::<_, Comment>(INSERT_COMMENT)
            .bind(article_id)
            .bind(&comment.author)
            .bind(&comment.body)
            .fetch_one(pool)
            .await?)
    }

    /// Atomic `votes = votes + delta`; returns the row after the increment.
    pub async fn patch_article_votes(
        pool: &PgPool,
        article_id: i32,
        patch: VotePatch,
    ) -> Result<Article, AppError> {
        tracing::debug!(sql = %UPDATE_ARTICLE_VOTES, article_id, delta = patch.delta, "query");
        sqlx::query_as::<_, Article>(UPDATE_ARTICLE_VOTES)
            .bind(patch.delta)
            .bind(article_id)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::NotFound { entity: "Article" })
    }

    pub async fn delete_comment(pool: &PgPool, comment_id: i32) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE_COMMENT, comment_id, "query");
        let result = sqlx::query(DELETE_COMMENT).bind(comment_id).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound { entity: "Comment" });
        }
        Ok(())
    }

    pub async fn fetch_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let sql = "SELECT username, name, avatar_url FROM users";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, User>(sql).fetch_all(pool).await?)
    }
}
