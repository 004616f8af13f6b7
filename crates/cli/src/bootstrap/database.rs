use ferrous_gslb_domain::config::DatabaseConfig;
use ferrous_gslb_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = cfg.url();
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to initialize record database: {}", e);
            anyhow::anyhow!(e)
        })?;

    let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gslb_records WHERE disabled = 0")
        .fetch_one(&pool)
        .await?;

    info!(
        enabled_records = records,
        max_connections = cfg.max_connections,
        "Database initialized successfully"
    );

    Ok(pool)
}
