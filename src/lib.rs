//! NC News: REST backend for topics, articles, comments and users on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::build_app;
pub use seed::{seed, SeedData};
pub use service::{NewsRepository, PayloadValidator};
pub use sql::{build_article_list_query, ArticleListQuery};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
