use anyhow::{Context, Result};
use inventory::{config::Config, handler::AppRouter, state::AppState};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

const SERVICE_NAME: &str = "inventory-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = config
        .otel_endpoint
        .as_ref()
        .map(|endpoint| Telemetry::new(SERVICE_NAME, endpoint.clone()));

    let logger_provider = match telemetry.as_mut() {
        Some(telemetry) => {
            telemetry.init_tracer()?;
            telemetry.init_meter()?;
            Some(telemetry.init_logger()?)
        }
        None => None,
    };

    let _log_guard = init_logger(
        logger_provider.as_ref(),
        SERVICE_NAME,
        config.dev_mode,
        config.enable_file_log,
    )
    .context("Failed to initialize logger")?;

    info!("🚀 Starting Inventory Service initialization...");

    let db_pool =
        ConnectionManager::new_pool(&config.database_url, config.db_min_conn, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    } else {
        info!("⏭️ Skipping database migrations");
    }

    let state = AppState::new(db_pool.clone());

    info!("✅ Application setup completed successfully.");

    let served = AppRouter::serve(config.port, state).await;

    ConnectionManager::close(&db_pool).await;

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    served.context("HTTP server failed")?;

    info!("✅ Inventory Service shutdown complete.");
    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("🧱 Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
