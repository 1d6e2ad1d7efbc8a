use crate::{
    domain::requests::notification::{PushNotificationRequest, SendReceiptRequest},
    errors::NotificationError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReceiptMailer = Arc<dyn ReceiptMailerTrait + Send + Sync>;
pub type DynNotifier = Arc<dyn NotifierTrait + Send + Sync>;

#[async_trait]
pub trait ReceiptMailerTrait {
    async fn send_receipt(&self, req: &SendReceiptRequest) -> Result<(), NotificationError>;
}

#[async_trait]
pub trait NotifierTrait {
    async fn notify(&self, req: &PushNotificationRequest) -> Result<(), NotificationError>;
}
