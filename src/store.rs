//! Database bootstrap and pool construction.

use crate::config::ServerConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Build the shared pool. The pool is the only handle to shared state; it is passed to every operation.
pub async fn connect_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Create the database named in `database_url` if it is missing, via the `postgres` maintenance database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    let (admin, db_name) = admin_target(database_url)?;
    let Some(db_name) = db_name else {
        return Ok(());
    };
    let mut conn = admin.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options pointing at `postgres`, plus the target database when it needs checking.
fn admin_target(database_url: &str) -> Result<(PgConnectOptions, Option<String>), sqlx::Error> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let target = opts
        .get_database()
        .filter(|name| !name.is_empty() && *name != "postgres")
        .map(str::to_owned);
    Ok((opts.database("postgres"), target))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
