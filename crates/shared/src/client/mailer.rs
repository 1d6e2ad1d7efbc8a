use crate::{
    abstract_trait::notification::ReceiptMailerTrait,
    config::MailConfig,
    domain::requests::notification::SendReceiptRequest,
    errors::NotificationError,
};
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Serialize)]
struct MailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

pub struct HttpReceiptMailer {
    http: reqwest::Client,
    base_url: String,
    sender: String,
}

impl HttpReceiptMailer {
    pub fn new(config: &MailConfig) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(&config.client)?,
            base_url: config.client.base_url.clone(),
            sender: config.sender.clone(),
        })
    }
}

#[async_trait]
impl ReceiptMailerTrait for HttpReceiptMailer {
    async fn send_receipt(&self, req: &SendReceiptRequest) -> Result<(), NotificationError> {
        let payload = MailPayload {
            from: &self.sender,
            to: &req.to,
            subject: &req.subject,
            body: &req.body,
        };

        let response = self
            .http
            .post(format!("{}/send", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Mail API unreachable: {e:?}");
                NotificationError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Mail API rejected receipt with HTTP {status}");
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("📧 Receipt sent: {}", req.subject);
        Ok(())
    }
}
