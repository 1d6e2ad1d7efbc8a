//! Recording of ledger moves that the payment path could not persist.
//!
//! Once the core banking system has confirmed an overbooking the money has
//! moved, so the matching transaction row must eventually exist. Records that
//! failed to persist inline are queued here and retried against the
//! idempotent `insert_transaction`. Records that still fail after the
//! configured attempts are written to the error log as dead letters.

use crate::{
    abstract_trait::transfer::repository::command::DynTransferCommandRepository,
    config::ReconciliationConfig, domain::requests::transfer::CreateTransactionRequest,
    errors::RepositoryError,
};
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ReconciliationQueue {
    tx: mpsc::Sender<CreateTransactionRequest>,
}

impl ReconciliationQueue {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<CreateTransactionRequest>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    pub async fn enqueue(&self, record: CreateTransactionRequest) {
        let reference = record.transaction_reference.clone();

        match self.tx.send(record).await {
            Ok(()) => info!("🧾 Ledger move {reference} queued for reconciliation"),
            Err(mpsc::error::SendError(record)) => dead_letter(&record, "reconciliation queue closed"),
        }
    }
}

pub struct ReconciliationWorker {
    command: DynTransferCommandRepository,
    rx: mpsc::Receiver<CreateTransactionRequest>,
    config: ReconciliationConfig,
}

impl ReconciliationWorker {
    pub fn new(
        command: DynTransferCommandRepository,
        rx: mpsc::Receiver<CreateTransactionRequest>,
        config: ReconciliationConfig,
    ) -> Self {
        Self {
            command,
            rx,
            config,
        }
    }

    /// Processes records until every sender is gone or `shutdown` fires.
    /// On shutdown, records already queued are still processed.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        info!("🧾 Reconciliation worker started");

        loop {
            tokio::select! {
                maybe = self.rx.recv() => match maybe {
                    Some(record) => {
                        self.reconcile(&record).await;
                    }
                    None => break,
                },
                _ = shutdown.recv() => {
                    info!("🧾 Reconciliation worker draining queue before shutdown");
                    self.rx.close();
                    while let Some(record) = self.rx.recv().await {
                        self.reconcile(&record).await;
                    }
                    break;
                }
            }
        }

        info!("🧾 Reconciliation worker stopped");
    }

    /// Returns `true` once the record is durably stored.
    pub async fn reconcile(&self, record: &CreateTransactionRequest) -> bool {
        let mut delay = self.config.backoff;

        for attempt in 1..=self.config.max_attempts {
            match self.command.insert_transaction(record).await {
                Ok(stored) => {
                    info!(
                        "✅ Reconciled ledger move {} as transaction {} (attempt {attempt})",
                        stored.transaction_reference, stored.transaction_id
                    );
                    return true;
                }
                Err(RepositoryError::Conflict(msg)) => {
                    dead_letter(record, &msg);
                    return false;
                }
                Err(e) => {
                    warn!(
                        "⚠️ Reconciliation attempt {attempt}/{} for {} failed: {e}",
                        self.config.max_attempts, record.transaction_reference
                    );
                    if attempt < self.config.max_attempts {
                        tokio::time::sleep(delay).await;
                        delay = delay.saturating_mul(2);
                    }
                }
            }
        }

        dead_letter(record, "retries exhausted");
        false
    }
}

fn dead_letter(record: &CreateTransactionRequest, reason: &str) {
    let payload = serde_json::to_string(record)
        .unwrap_or_else(|e| format!("<unserializable record: {e}>"));

    error!(
        target: "reconciliation_dead_letter",
        transaction_reference = %record.transaction_reference,
        sequence_number = %record.sequence_number,
        "❌ Ledger move needs manual repair ({reason}): {payload}"
    );
}
