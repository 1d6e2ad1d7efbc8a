use crate::{
    abstract_trait::notification::NotifierTrait, config::HttpClientConfig,
    domain::requests::notification::PushNotificationRequest, errors::NotificationError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct HttpNotifier {
    http: reqwest::Client,
    base_url: String,
}

impl HttpNotifier {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(config)?,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl NotifierTrait for HttpNotifier {
    async fn notify(&self, req: &PushNotificationRequest) -> Result<(), NotificationError> {
        let response = self
            .http
            .post(format!("{}/notifications", self.base_url))
            .json(req)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Push gateway unreachable: {e:?}");
                NotificationError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Push gateway rejected notification with HTTP {status}");
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("🔔 Push notification sent to user {}", req.user_id);
        Ok(())
    }
}
