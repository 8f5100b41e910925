use anyhow::{Context, Result};
use catalog::{handler::AppRouter, repository::init_database, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _guard = init_logger("catalog-service", config.is_dev, config.enable_file_log);

    info!("🚀 Starting catalog service initialization...");

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    info!("🗄️ Connected to {:?} store", pool.backend());

    let state = AppState::new(pool.clone()).await;

    // a broken schema only surfaces as 500s, the server still starts
    if let Err(e) = init_database(state.di_container.schema.as_ref()).await {
        error!("❌ Database initialization failed: {e}");
    }

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to run HTTP server")?;

    pool.close().await;
    info!("✅ Catalog service shutdown complete.");

    Ok(())
}
