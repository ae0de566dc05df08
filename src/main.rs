use anyhow::{Context, Result};
use dotenv::dotenv;
use ecommerce::{
    config::{Config, ConnectionManager},
    handler::AppRouter,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("server");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    if config.run_migrations {
        info!("🚜 Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(pool, &config);

    AppRouter::serve(config.port, state).await
}
