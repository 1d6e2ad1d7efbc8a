use crate::{
    abstract_trait::transfer::{
        repository::query::DynTransferQueryRepository, service::query::TransferQueryServiceTrait,
    },
    errors::{RepositoryError, ServiceError},
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransferQueryService {
    query: DynTransferQueryRepository,
}

impl TransferQueryService {
    pub fn new(query: DynTransferQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl TransferQueryServiceTrait for TransferQueryService {
    async fn find_transaction(
        &self,
        sequence_number: &str,
    ) -> Result<TransactionModel, ServiceError> {
        info!("🔍 Looking up transaction for sequence {sequence_number}");

        self.query
            .find_transaction_by_sequence(sequence_number)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    info!("No transaction recorded for sequence {sequence_number}");
                    ServiceError::TransactionNotFound(sequence_number.to_string())
                }
                e => {
                    error!("❌ [find_transaction] sequence {sequence_number}: {e}");
                    ServiceError::Repo(e)
                }
            })
    }
}
