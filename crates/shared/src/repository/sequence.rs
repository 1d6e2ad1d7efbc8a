use crate::{
    abstract_trait::sequence::SequenceGeneratorTrait, config::ConnectionPool,
    errors::RepositoryError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

/// Sequence numbers backed by a PostgreSQL sequence, so uniqueness holds
/// across every process sharing the database.
pub struct PgSequenceGenerator {
    db: ConnectionPool,
}

impl PgSequenceGenerator {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SequenceGeneratorTrait for PgSequenceGenerator {
    async fn generate(&self) -> Result<String, RepositoryError> {
        let next: i64 = sqlx::query_scalar("SELECT nextval('transfer_sequence_number_seq')")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to draw next sequence number: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(format!("{next:012}"))
    }
}
