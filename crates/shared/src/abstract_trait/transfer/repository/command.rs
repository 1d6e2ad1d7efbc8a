use crate::{
    domain::requests::transfer::CreateTransactionRequest,
    errors::RepositoryError,
    model::{sequence::SequenceModel, transaction::TransactionModel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransferCommandRepository = Arc<dyn TransferCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransferCommandRepositoryTrait {
    async fn insert_sequence(&self, seq: &SequenceModel) -> Result<SequenceModel, RepositoryError>;

    /// `RESERVED -> PROCESSING`. `false` when another caller got there first
    /// or the sequence was already paid.
    async fn claim_sequence(&self, sequence_number: &str) -> Result<bool, RepositoryError>;

    /// `PROCESSING -> RESERVED`, after the ledger refused the move.
    async fn release_sequence(&self, sequence_number: &str) -> Result<(), RepositoryError>;

    /// Records the confirmed transfer and marks its sequence `CONSUMED` in one
    /// unit. Idempotent on `transaction_reference`.
    async fn insert_transaction(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError>;
}
