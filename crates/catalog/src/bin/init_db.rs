use anyhow::{Context, Result};
use catalog::repository::{Repositories, init_database};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _guard = init_logger("catalog-init-db", config.is_dev, config.enable_file_log);

    let pool = ConnectionManager::new_pool(&config.database_url, 1, 1)
        .await
        .context("Failed to initialize database pool")?;

    let repos = Repositories::new(&pool);
    let result = init_database(repos.schema.as_ref()).await;

    pool.close().await;

    let seeded = result.context("Database initialization failed")?;
    if seeded {
        info!("🌱 Database initialized with sample data");
    } else {
        info!("✅ Database already initialized");
    }

    Ok(())
}
