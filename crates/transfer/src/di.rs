use anyhow::{Context, Result};
use shared::{
    abstract_trait::{
        corebanking::DynCoreBankingGateway,
        notification::{DynNotifier, DynReceiptMailer},
        sequence::DynSequenceGenerator,
        transfer::{
            repository::{
                command::DynTransferCommandRepository, query::DynTransferQueryRepository,
            },
            service::{command::DynTransferCommandService, query::DynTransferQueryService},
        },
    },
    client::{CoreBankingClient, HttpNotifier, HttpReceiptMailer},
    config::{Config, ConnectionPool},
    repository::{
        sequence::PgSequenceGenerator,
        transfer::{command::TransferCommandRepository, query::TransferQueryRepository},
    },
    service::transfer::{
        command::{TransferCommandService, TransferCommandServiceDeps},
        query::TransferQueryService,
        reconciliation::{ReconciliationQueue, ReconciliationWorker},
    },
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct TransferCommandDeps {
    pub repo: DynTransferCommandRepository,
    pub service: DynTransferCommandService,
}

impl TransferCommandDeps {
    pub fn new(
        db: ConnectionPool,
        config: &Config,
        query: DynTransferQueryRepository,
        reconciliation: ReconciliationQueue,
    ) -> Result<Self> {
        let repo =
            Arc::new(TransferCommandRepository::new(db.clone())) as DynTransferCommandRepository;

        let core_banking = Arc::new(
            CoreBankingClient::new(&config.core_banking)
                .context("Failed to build core banking client")?,
        ) as DynCoreBankingGateway;

        let sequence_generator =
            Arc::new(PgSequenceGenerator::new(db.clone())) as DynSequenceGenerator;

        let mailer = Arc::new(
            HttpReceiptMailer::new(&config.mail).context("Failed to build mail client")?,
        ) as DynReceiptMailer;

        let notifier = match &config.push.client {
            Some(push) if config.push.enabled => Some(Arc::new(
                HttpNotifier::new(push).context("Failed to build push client")?,
            ) as DynNotifier),
            _ => {
                info!("Push notifications disabled");
                None
            }
        };

        let service = Arc::new(TransferCommandService::new(TransferCommandServiceDeps {
            core_banking,
            sequence_generator,
            query,
            command: repo.clone(),
            mailer,
            notifier,
            reconciliation,
        })) as DynTransferCommandService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct TransferQueryDeps {
    pub service: DynTransferQueryService,
}

impl TransferQueryDeps {
    pub fn new(query: DynTransferQueryRepository) -> Self {
        let service = Arc::new(TransferQueryService::new(query)) as DynTransferQueryService;
        Self { service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub transfer_command: TransferCommandDeps,
    pub transfer_query: TransferQueryDeps,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("transfer_command", &"TransferCommandService")
            .field("transfer_query", &"TransferQueryService")
            .finish()
    }
}

impl DependenciesInject {
    /// Builds the service graph. The returned worker must be spawned by the
    /// caller; until it runs, reconciliation records only accumulate.
    pub fn new(db: ConnectionPool, config: &Config) -> Result<(Self, ReconciliationWorker)> {
        let query = Arc::new(TransferQueryRepository::new(db.clone())) as DynTransferQueryRepository;

        let (reconciliation, reconciliation_rx) =
            ReconciliationQueue::channel(config.reconciliation.queue_capacity);

        let transfer_command =
            TransferCommandDeps::new(db.clone(), config, query.clone(), reconciliation)?;
        let transfer_query = TransferQueryDeps::new(query);

        let worker = ReconciliationWorker::new(
            transfer_command.repo.clone(),
            reconciliation_rx,
            config.reconciliation.clone(),
        );

        Ok((
            Self {
                transfer_command,
                transfer_query,
            },
            worker,
        ))
    }
}
