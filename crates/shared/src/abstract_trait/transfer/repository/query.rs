use crate::{
    errors::RepositoryError,
    model::{limits::Limits, sequence::SequenceModel, transaction::TransactionModel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransferQueryRepository = Arc<dyn TransferQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransferQueryRepositoryTrait {
    async fn get_transaction_limit(&self) -> Result<Limits, RepositoryError>;
    async fn get_sequence(&self, sequence_number: &str) -> Result<SequenceModel, RepositoryError>;
    async fn find_transaction_by_sequence(
        &self,
        sequence_number: &str,
    ) -> Result<TransactionModel, RepositoryError>;
}
