use crate::config::{DatabaseConfig, HttpClientConfig};
use anyhow::{Context, Result, anyhow};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub port: u16,
    pub is_dev: bool,
    pub core_banking: HttpClientConfig,
    pub mail: MailConfig,
    pub push: PushConfig,
    pub reconciliation: ReconciliationConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations = parse_bool("RUN_MIGRATIONS")?;
        let port = std::env::var("PORT")
            .context("Missing env: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?;

        let acquire_timeout_secs = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64 integer")?;

        let is_dev = std::env::var("APP_ENV")
            .map(|env| env == "development")
            .unwrap_or(false);

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                run_migrations,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            port,
            is_dev,
            core_banking: HttpClientConfig::from_env("CORE_BANKING")?,
            mail: MailConfig::from_env()?,
            push: PushConfig::from_env()?,
            reconciliation: ReconciliationConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub client: HttpClientConfig,
    pub sender: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self> {
        let sender = std::env::var("MAIL_SENDER").context("Missing env: MAIL_SENDER")?;

        Ok(Self {
            client: HttpClientConfig::from_env("MAIL")?,
            sender,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PushConfig {
    pub enabled: bool,
    pub client: Option<HttpClientConfig>,
}

impl PushConfig {
    pub fn from_env() -> Result<Self> {
        let enabled = parse_bool("PUSH_ENABLED")?;

        let client = if enabled {
            Some(HttpClientConfig::from_env("PUSH")?)
        } else {
            None
        };

        Ok(Self { enabled, client })
    }
}

#[derive(Debug, Clone)]
pub struct ReconciliationConfig {
    pub max_attempts: u32,
    pub backoff: Duration,
    pub queue_capacity: usize,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_millis(500),
            queue_capacity: 1024,
        }
    }
}

impl ReconciliationConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_attempts = match std::env::var("RECONCILIATION_MAX_ATTEMPTS") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("RECONCILIATION_MAX_ATTEMPTS must be a valid u32 integer")?,
            Err(_) => defaults.max_attempts,
        };

        let backoff = match std::env::var("RECONCILIATION_BACKOFF_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .context("RECONCILIATION_BACKOFF_MS must be a valid u64 integer")?,
            ),
            Err(_) => defaults.backoff,
        };

        if max_attempts == 0 {
            return Err(anyhow!("RECONCILIATION_MAX_ATTEMPTS must be at least 1"));
        }

        Ok(Self {
            max_attempts,
            backoff,
            queue_capacity: defaults.queue_capacity,
        })
    }
}

fn parse_bool(key: &str) -> Result<bool> {
    let raw = std::env::var(key).context(format!("Missing env: {key}"))?;

    match raw.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}
