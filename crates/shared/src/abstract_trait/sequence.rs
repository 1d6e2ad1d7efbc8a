use crate::errors::RepositoryError;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSequenceGenerator = Arc<dyn SequenceGeneratorTrait + Send + Sync>;

#[async_trait]
pub trait SequenceGeneratorTrait {
    /// A transaction sequence number never handed out before.
    async fn generate(&self) -> Result<String, RepositoryError>;
}
