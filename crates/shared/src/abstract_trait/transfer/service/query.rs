use crate::{errors::ServiceError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransferQueryService = Arc<dyn TransferQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransferQueryServiceTrait {
    async fn find_transaction(
        &self,
        sequence_number: &str,
    ) -> Result<TransactionModel, ServiceError>;
}
