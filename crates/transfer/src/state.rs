use crate::{di::DependenciesInject, metrics::Metrics};
use anyhow::{Context, Result};
use shared::{
    config::{Config, ConnectionPool},
    service::transfer::reconciliation::ReconciliationWorker,
};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<(Self, ReconciliationWorker)> {
        let (di_container, worker) = DependenciesInject::new(pool, config)
            .context("Failed to initialize dependency injection container")?;

        Ok((
            Self {
                di_container,
                metrics: Arc::new(Metrics::new()),
            },
            worker,
        ))
    }
}
