//! Reset a database and load a data directory (`SEED_DATA_DIR`, default `data/test`).

use nc_news::{apply_migrations, connect_pool, ensure_database_exists, seed, SeedData, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nc_news=info")))
        .init();

    let config = ServerConfig::from_env()?;
    let data_dir = std::env::var("SEED_DATA_DIR").unwrap_or_else(|_| "data/test".into());

    ensure_database_exists(&config.database_url).await?;
    let pool = connect_pool(&config).await?;
    apply_migrations(&pool).await?;

    let data = SeedData::from_dir(&data_dir).await?;
    seed(&pool, &data).await?;
    tracing::info!(dir = %data_dir, "database seeded");
    Ok(())
}
