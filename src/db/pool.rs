use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{config::DbPoolConfig, errors::AppError};

pub async fn create_pool(database_url: &str, config: &DbPoolConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create database pool: {}", e)))?;

    tracing::info!(
        "Database pool created: max={}, min={}, acquire_timeout={}s",
        config.max_connections,
        config.min_connections,
        config.acquire_timeout.as_secs()
    );

    Ok(pool)
}
