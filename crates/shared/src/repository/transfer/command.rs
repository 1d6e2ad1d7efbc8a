use crate::{
    abstract_trait::transfer::repository::command::TransferCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::transfer::CreateTransactionRequest,
    errors::RepositoryError,
    model::{
        sequence::{SequenceModel, SequenceStatus},
        transaction::TransactionModel,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct TransferCommandRepository {
    db: ConnectionPool,
}

impl TransferCommandRepository {
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

    async fn move_status(
        &self,
        sequence_number: &str,
        from: SequenceStatus,
        to: SequenceStatus,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE transfer_sequences
            SET status = $3,
                updated_at = current_timestamp
            WHERE sequence_number = $1
              AND status = $2
            "#,
        )
        .bind(sequence_number)
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to move sequence {sequence_number} from {from} to {to}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl TransferCommandRepositoryTrait for TransferCommandRepository {
    async fn insert_sequence(&self, seq: &SequenceModel) -> Result<SequenceModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, SequenceModel>(
            r#"
            INSERT INTO transfer_sequences (
                sequence_number,
                amount,
                source_account,
                destination_account,
                source_name,
                destination_name,
                transaction_type,
                status,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, current_timestamp, current_timestamp)
            RETURNING
                sequence_number,
                amount,
                source_account,
                destination_account,
                source_name,
                destination_name,
                transaction_type,
                status,
                created_at
            "#,
        )
        .bind(&seq.sequence_number)
        .bind(seq.amount)
        .bind(&seq.source_account)
        .bind(&seq.destination_account)
        .bind(&seq.source_name)
        .bind(&seq.destination_name)
        .bind(&seq.transaction_type)
        .bind(&seq.status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to persist sequence {}: {e:?}", seq.sequence_number);
            RepositoryError::from(e)
        })?;

        info!("✅ Sequence {} reserved", result.sequence_number);

        Ok(result)
    }

    async fn claim_sequence(&self, sequence_number: &str) -> Result<bool, RepositoryError> {
        let claimed = self
            .move_status(
                sequence_number,
                SequenceStatus::Reserved,
                SequenceStatus::Processing,
            )
            .await?;

        if !claimed {
            warn!("⚠️ Sequence {sequence_number} is not in RESERVED state");
        }

        Ok(claimed)
    }

    async fn release_sequence(&self, sequence_number: &str) -> Result<(), RepositoryError> {
        let released = self
            .move_status(
                sequence_number,
                SequenceStatus::Processing,
                SequenceStatus::Reserved,
            )
            .await?;

        if !released {
            warn!("⚠️ Sequence {sequence_number} was not PROCESSING on release");
        }

        Ok(())
    }

    async fn insert_transaction(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO transfer_transactions (
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
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, current_timestamp)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(&req.sequence_number)
        .bind(&req.sequence_journal)
        .bind(&req.transaction_reference)
        .bind(&req.source_account)
        .bind(&req.destination)
        .bind(req.amount)
        .bind(&req.fee)
        .bind(&req.remarks)
        .bind(&req.status)
        .bind(&req.destination_name)
        .bind(req.user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to insert transaction {}: {e:?}",
                req.transaction_reference
            );
            RepositoryError::from(e)
        })?;

        let stored = sqlx::query_as::<_, TransactionModel>(
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
            WHERE transaction_reference = $1
            "#,
        )
        .bind(&req.transaction_reference)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to read back transaction {}: {e:?}",
                req.transaction_reference
            );
            RepositoryError::from(e)
        })?
        .ok_or_else(|| {
            error!(
                "❌ Sequence {} already recorded under another reference",
                req.sequence_number
            );
            RepositoryError::Conflict(format!(
                "sequence {} already recorded under another reference",
                req.sequence_number
            ))
        })?;

        sqlx::query(
            r#"
            UPDATE transfer_sequences
            SET status = $2,
                updated_at = current_timestamp
            WHERE sequence_number = $1
            "#,
        )
        .bind(&req.sequence_number)
        .bind(SequenceStatus::Consumed.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to consume sequence {}: {e:?}",
                req.sequence_number
            );
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Transaction {} recorded for sequence {}",
            stored.transaction_reference, stored.sequence_number
        );

        Ok(stored)
    }
}
