mod corebanking;
mod mailer;
mod notifier;

pub use self::corebanking::CoreBankingClient;
pub use self::mailer::HttpReceiptMailer;
pub use self::notifier::HttpNotifier;

use crate::config::HttpClientConfig;
use anyhow::{Context, Result};

fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context(format!("Failed to build HTTP client for {}", config.base_url))
}
