use anyhow::{Context, Result};
use std::time::Duration;

/// Base URL and deadline for one outbound HTTP dependency.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn from_env(prefix: &str) -> Result<Self> {
        let base_url = std::env::var(format!("{prefix}_BASE_URL"))
            .context(format!("Missing env: {prefix}_BASE_URL"))?;

        let timeout_secs = std::env::var(format!("{prefix}_TIMEOUT_SECS"))
            .context(format!("Missing env: {prefix}_TIMEOUT_SECS"))?
            .parse::<u64>()
            .context(format!("{prefix}_TIMEOUT_SECS must be a valid u64 integer"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
