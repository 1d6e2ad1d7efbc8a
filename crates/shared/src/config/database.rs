use anyhow::{Context, Result};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = PgPool;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub run_migrations: bool,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(config: &DatabaseConfig) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        if config.run_migrations {
            info!("Running database migrations");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
        }

        Ok(pool)
    }
}
