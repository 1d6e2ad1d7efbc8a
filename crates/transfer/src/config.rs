use anyhow::{Result, anyhow};
use shared::config::{Config, DatabaseConfig, ReconciliationConfig};
use std::{net::SocketAddr, time::Duration};

/// Shutdown grace period for in-flight requests and the reconciliation drain.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub reconciliation: ReconciliationConfig,
    pub is_dev: bool,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.port == 0 {
            return Err(anyhow!("PORT must not be 0"));
        }

        Ok(Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], config.port)),
            database: config.database.clone(),
            reconciliation: config.reconciliation.clone(),
            is_dev: config.is_dev,
        })
    }
}
