//! Reset and seed the four tables from a JSON data directory.

use crate::error::ConfigError;
use crate::model::{Topic, User};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sqlx::PgPool;
use std::path::Path;

/// Article row before the store assigns its id (ids follow file order after a reset).
#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i32,
    pub article_img_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub body: String,
    pub article_id: i32,
    pub author: String,
    #[serde(default)]
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SeedData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    pub articles: Vec<SeedArticle>,
    pub comments: Vec<SeedComment>,
}

impl SeedData {
    /// Read `topics.json`, `users.json`, `articles.json`, `comments.json` from `dir`.
    pub async fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        Ok(SeedData {
            topics: read_json(&dir.join("topics.json")).await?,
            users: read_json(&dir.join("users.json")).await?,
            articles: read_json(&dir.join("articles.json")).await?,
            comments: read_json(&dir.join("comments.json")).await?,
        })
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::SeedData(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::SeedData(format!("{}: {}", path.display(), e)))
}

/// Truncate every table (restarting ids) and insert `data` in dependency order, in one transaction.
pub async fn seed(pool: &PgPool, data: &SeedData) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("TRUNCATE comments, articles, users, topics RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    for t in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&t.slug)
            .bind(&t.description)
            .execute(&mut *tx)
            .await?;
    }
    for u in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&u.username)
            .bind(&u.name)
            .bind(&u.avatar_url)
            .execute(&mut *tx)
            .await?;
    }
    for a in &data.articles {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes, article_img_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&a.title)
        .bind(&a.topic)
        .bind(&a.author)
        .bind(&a.body)
        .bind(a.created_at)
        .bind(a.votes)
        .bind(&a.article_img_url)
        .execute(&mut *tx)
        .await?;
    }
    for c in &data.comments {
        sqlx::query(
            "INSERT INTO comments (body, article_id, author, votes, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&c.body)
        .bind(c.article_id)
        .bind(&c.author)
        .bind(c.votes)
        .bind(c.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "seeded"
    );
    Ok(())
}
