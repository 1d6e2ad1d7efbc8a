use crate::{
    abstract_trait::transfer::repository::query::TransferQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        limits::{Limits, TransactionLimitModel},
        sequence::SequenceModel,
        transaction::TransactionModel,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct TransferQueryRepository {
    db: ConnectionPool,
}

impl TransferQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransferQueryRepositoryTrait for TransferQueryRepository {
    async fn get_transaction_limit(&self) -> Result<Limits, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let model = sqlx::query_as::<_, TransactionLimitModel>(
            r#"
            SELECT
                limit_id,
                min_amount,
                max_amount,
                max_daily_amount,
                updated_at
            FROM transaction_limits
            ORDER BY updated_at DESC NULLS LAST, limit_id DESC
            LIMIT 1
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to load transaction limit: {e:?}");
            RepositoryError::from(e)
        })?;

        Limits::try_from(model).map_err(|e| {
            error!("❌ Stored transaction limit is inconsistent: {e}");
            RepositoryError::Custom(e.to_string())
        })
    }

    async fn get_sequence(&self, sequence_number: &str) -> Result<SequenceModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, SequenceModel>(
            r#"
            SELECT
                sequence_number,
                amount,
                source_account,
                destination_account,
                source_name,
                destination_name,
                transaction_type,
                status,
                created_at
            FROM transfer_sequences
            WHERE sequence_number = $1
            "#,
        )
        .bind(sequence_number)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to load sequence {sequence_number}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_transaction_by_sequence(
        &self,
        sequence_number: &str,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT
                transaction_id,
                sequence_number,
                sequence_journal,
                transaction_reference,
                source_account,
                destination,
                amount,
                fee,
                remarks,
                status,
                destination_name,
                user_id,
                created_at
            FROM transfer_transactions
            WHERE sequence_number = $1
            "#,
        )
        .bind(sequence_number)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to load transaction for sequence {sequence_number}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
