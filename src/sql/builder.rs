//! Builds the parameterized article listing statement.

use crate::error::AppError;
use std::collections::HashSet;

pub const DEFAULT_SORT_BY: &str = "created_at";
pub const DEFAULT_ORDER: &str = "DESC";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortKey {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "created_at" => Ok(SortKey::CreatedAt),
            "votes" => Ok(SortKey::Votes),
            "comment_count" => Ok(SortKey::CommentCount),
            _ => Err(AppError::InvalidSort),
        }
    }

    /// Identifier injected into ORDER BY. Never user text.
    fn column(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "articles.created_at",
            SortKey::Votes => "articles.votes",
            SortKey::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-sensitive: only `ASC` and `DESC` are accepted.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(AppError::InvalidSort),
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Validated listing request. Construct with [`ArticleListQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub topic: Option<String>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl ArticleListQuery {
    /// Validate raw query values. Sort problems are reported before an unknown topic.
    pub fn new(
        known_topics: &HashSet<String>,
        topic: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, AppError> {
        let sort_by = SortKey::parse(sort_by.unwrap_or(DEFAULT_SORT_BY))?;
        let order = SortOrder::parse(order.unwrap_or(DEFAULT_ORDER))?;
        if let Some(t) = topic {
            if !known_topics.contains(t) {
                return Err(AppError::UnknownTopic);
            }
        }
        Ok(ArticleListQuery {
            topic: topic.map(String::from),
            sort_by,
            order,
        })
    }

    /// SELECT summary columns with a computed comment count; topic bound as $1 when present.
    pub fn build(&self) -> QueryBuf {
        let mut q = QueryBuf::new();
        let where_clause = match &self.topic {
            Some(t) => {
                let n = q.push_param(t.clone());
                format!(" WHERE articles.topic = ${}", n)
            }
            None => String::new(),
        };
        q.sql = format!(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
             articles.created_at, articles.votes, articles.article_img_url, \
             COUNT(comments.comment_id)::INT AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id{} \
             GROUP BY articles.article_id \
             ORDER BY {} {}, articles.article_id ASC",
            where_clause,
            self.sort_by.column(),
            self.order.keyword()
        );
        q
    }
}

/// Validate and build in one step.
pub fn build_article_list_query(
    known_topics: &HashSet<String>,
    topic: Option<&str>,
    sort_by: Option<&str>,
    order: Option<&str>,
) -> Result<QueryBuf, AppError> {
    Ok(ArticleListQuery::new(known_topics, topic, sort_by, order)?.build())
}
