use crate::{
    abstract_trait::{
        corebanking::DynCoreBankingGateway,
        notification::{DynNotifier, DynReceiptMailer},
        sequence::DynSequenceGenerator,
        transfer::{
            repository::{
                command::DynTransferCommandRepository, query::DynTransferQueryRepository,
            },
            service::command::TransferCommandServiceTrait,
        },
    },
    domain::{
        requests::{
            corebanking::OverbookingRequest,
            notification::{PushNotificationRequest, SendReceiptRequest},
            session::{CallerContext, SessionUser},
            transfer::{CreateTransactionRequest, InquiryRequest, PaymentRequest},
        },
        responses::OverbookingResponse,
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::{
        account::Account,
        money::Money,
        sequence::{SequenceModel, SequenceStatus},
        transaction::TransactionModel,
    },
    service::transfer::reconciliation::ReconciliationQueue,
    utils::mask_account_number,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct TransferCommandServiceDeps {
    pub core_banking: DynCoreBankingGateway,
    pub sequence_generator: DynSequenceGenerator,
    pub query: DynTransferQueryRepository,
    pub command: DynTransferCommandRepository,
    pub mailer: DynReceiptMailer,
    pub notifier: Option<DynNotifier>,
    pub reconciliation: ReconciliationQueue,
}

/// Two-phase intrabank transfer: `inquiry` reserves a sequence, `do_payment`
/// redeems it exactly once against the core banking ledger.
pub struct TransferCommandService {
    core_banking: DynCoreBankingGateway,
    sequence_generator: DynSequenceGenerator,
    query: DynTransferQueryRepository,
    command: DynTransferCommandRepository,
    mailer: DynReceiptMailer,
    notifier: Option<DynNotifier>,
    reconciliation: ReconciliationQueue,
}

impl TransferCommandService {
    pub fn new(deps: TransferCommandServiceDeps) -> Self {
        let TransferCommandServiceDeps {
            core_banking,
            sequence_generator,
            query,
            command,
            mailer,
            notifier,
            reconciliation,
        } = deps;

        Self {
            core_banking,
            sequence_generator,
            query,
            command,
            mailer,
            notifier,
            reconciliation,
        }
    }

    async fn ensure_core_available(&self) -> Result<(), ServiceError> {
        let core = self.core_banking.get_core_status().await.map_err(|e| {
            error!("❌ [core_status] failed to query core banking status: {e}");
            ServiceError::Gateway(e)
        })?;

        if core.is_eod_running() {
            warn!(
                "⛔ [core_status] end of day running for {} (status={}, stand_in={})",
                core.system_date, core.status, core.stand_in_status
            );
            return Err(ServiceError::EodInProgress);
        }

        Ok(())
    }

    async fn ensure_within_limits(&self, amount: Money) -> Result<(), ServiceError> {
        let limits = self.query.get_transaction_limit().await.map_err(|e| {
            error!("❌ [transaction_limit] failed to load transaction limit: {e}");
            ServiceError::Repo(e)
        })?;

        if !limits.can_transfer(amount) {
            warn!(
                "⛔ [transaction_limit] amount {amount} outside [{}, {}] daily {}",
                limits.min_amount(),
                limits.max_amount(),
                limits.max_daily_amount()
            );
            return Err(ServiceError::InvalidAmount(amount));
        }

        Ok(())
    }

    async fn active_account(
        &self,
        stage: &str,
        account_number: &str,
        inactive: ServiceError,
    ) -> Result<Account, ServiceError> {
        let masked = mask_account_number(account_number);

        let account = self
            .core_banking
            .get_account_details(account_number)
            .await
            .map_err(|e| {
                error!("❌ [{stage}] failed to fetch account {masked}: {e}");
                ServiceError::Gateway(e)
            })?;

        if !account.is_account_active() {
            warn!("⛔ [{stage}] account {masked} has status {:?}", account.status);
            return Err(inactive);
        }

        Ok(account)
    }

    /// Overbooking, identity check and recording. Runs detached from the
    /// caller so a dropped request cannot abandon a ledger move half way.
    async fn execute_ledger_move(
        core_banking: DynCoreBankingGateway,
        command: DynTransferCommandRepository,
        reconciliation: ReconciliationQueue,
        sequence: SequenceModel,
        user: Option<SessionUser>,
    ) -> Result<(TransactionModel, SessionUser), ServiceError> {
        let overbooking = OverbookingRequest {
            source_account: sequence.source_account.clone(),
            destination_account: sequence.destination_account.clone(),
            amount: sequence.amount,
            fee: Money::ZERO,
            remark: sequence.remark(),
        };

        let ledger: OverbookingResponse = match core_banking.perform_overbooking(&overbooking).await
        {
            Ok(ledger) => ledger,
            Err(e) => {
                error!(
                    "❌ [overbooking] sequence {} refused by core banking: {e}",
                    sequence.sequence_number
                );
                if let Err(release) = command.release_sequence(&sequence.sequence_number).await {
                    error!(
                        "❌ [claim_sequence] failed to release sequence {}: {release}",
                        sequence.sequence_number
                    );
                }
                return Err(ServiceError::Gateway(e));
            }
        };

        info!(
            "🏦 [overbooking] sequence {} booked: journal={} reference={}",
            sequence.sequence_number, ledger.journal_sequence, ledger.transaction_reference
        );

        let mut record = CreateTransactionRequest::confirmed(&sequence, &ledger);

        let Some(user) = user else {
            warn!(
                "⛔ [session] no caller identity after ledger move {}; recording without owner",
                ledger.transaction_reference
            );
            if let Err(e) = command.insert_transaction(&record).await {
                error!(
                    "❌ [insert_transaction] ownerless ledger move {} not recorded: {e}",
                    record.transaction_reference
                );
                reconciliation.enqueue(record).await;
            }
            return Err(ServiceError::Unauthenticated);
        };

        record.user_id = Some(user.user_id);

        match command.insert_transaction(&record).await {
            Ok(transaction) => Ok((transaction, user)),
            Err(e) => {
                error!(
                    "❌ [insert_transaction] ledger move {} not recorded: {e}",
                    record.transaction_reference
                );
                let transaction_reference = record.transaction_reference.clone();
                reconciliation.enqueue(record).await;
                Err(ServiceError::LedgerCommittedUnrecorded {
                    transaction_reference,
                    source: e,
                })
            }
        }
    }
}

#[async_trait]
impl TransferCommandServiceTrait for TransferCommandService {
    async fn inquiry(&self, req: &InquiryRequest) -> Result<SequenceModel, ServiceError> {
        info!(
            "🔎 Inquiry {} -> {} amount {}",
            mask_account_number(&req.source_account),
            mask_account_number(&req.destination_account),
            req.amount
        );

        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("❌ [validation] inquiry rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        self.ensure_core_available().await?;
        self.ensure_within_limits(req.amount).await?;

        let mut sequence = SequenceModel::draft(
            req.amount,
            &req.source_account,
            &req.destination_account,
            req.transaction_type.unwrap_or_default(),
        );

        let source = self
            .active_account(
                "source_account",
                &req.source_account,
                ServiceError::SourceAccountInactive,
            )
            .await?;
        sequence.source_name = source.name;

        let destination = self
            .active_account(
                "destination_account",
                &req.destination_account,
                ServiceError::DestinationAccountInactive,
            )
            .await?;
        sequence.destination_name = destination.name;

        sequence.sequence_number = self.sequence_generator.generate().await.map_err(|e| {
            error!("❌ [generate_sequence] failed to generate sequence number: {e}");
            ServiceError::Repo(e)
        })?;

        let stored = self.command.insert_sequence(&sequence).await.map_err(|e| {
            error!(
                "❌ [insert_sequence] failed to persist sequence {}: {e}",
                sequence.sequence_number
            );
            ServiceError::Repo(e)
        })?;

        info!("✅ Inquiry reserved sequence {}", stored.sequence_number);

        Ok(stored)
    }

    async fn do_payment(
        &self,
        caller: &CallerContext,
        req: &PaymentRequest,
    ) -> Result<TransactionModel, ServiceError> {
        info!("💸 Payment for sequence {}", req.sequence_number);

        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("❌ [validation] payment rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        self.ensure_core_available().await?;

        let sequence = self
            .query
            .get_sequence(&req.sequence_number)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    warn!("⛔ [get_sequence] sequence {} not found", req.sequence_number);
                    ServiceError::InvalidSequenceNumber(req.sequence_number.clone())
                }
                e => {
                    error!(
                        "❌ [get_sequence] failed to load sequence {}: {e}",
                        req.sequence_number
                    );
                    ServiceError::Repo(e)
                }
            })?;

        if !sequence.valid(&req.sequence_number) {
            warn!(
                "⛔ [get_sequence] stored sequence {} does not match {}",
                sequence.sequence_number, req.sequence_number
            );
            return Err(ServiceError::InvalidSequenceNumber(req.sequence_number.clone()));
        }

        if sequence.status() != Some(SequenceStatus::Reserved) {
            warn!(
                "⛔ [claim_sequence] sequence {} is {}",
                sequence.sequence_number, sequence.status
            );
            return Err(ServiceError::SequenceAlreadyConsumed(
                sequence.sequence_number.clone(),
            ));
        }

        self.ensure_within_limits(sequence.amount).await?;

        let claimed = self
            .command
            .claim_sequence(&sequence.sequence_number)
            .await
            .map_err(|e| {
                error!(
                    "❌ [claim_sequence] failed to claim sequence {}: {e}",
                    sequence.sequence_number
                );
                ServiceError::Repo(e)
            })?;

        if !claimed {
            warn!(
                "⛔ [claim_sequence] sequence {} taken by a concurrent payment",
                sequence.sequence_number
            );
            return Err(ServiceError::SequenceAlreadyConsumed(
                sequence.sequence_number.clone(),
            ));
        }

        let ledger_move = tokio::spawn(Self::execute_ledger_move(
            self.core_banking.clone(),
            self.command.clone(),
            self.reconciliation.clone(),
            sequence,
            caller.user.clone(),
        ));

        let (transaction, user) = ledger_move.await.map_err(|e| {
            error!("❌ [overbooking] ledger task aborted: {e}");
            ServiceError::Internal(format!("ledger task aborted: {e}"))
        })??;

        info!(
            "✅ Transfer {} recorded as transaction {}",
            transaction.sequence_number, transaction.transaction_reference
        );

        let receipt = SendReceiptRequest::for_transaction(&user, &transaction);
        if let Err(e) = self.mailer.send_receipt(&receipt).await {
            error!(
                "❌ [send_email] receipt for {} not delivered: {e}",
                transaction.sequence_number
            );
            return Err(ServiceError::SendEmailFailed {
                transaction: Box::new(transaction),
                source: e,
            });
        }

        if let Some(notifier) = &self.notifier {
            let push = PushNotificationRequest::for_transaction(&user, &transaction);
            if let Err(e) = notifier.notify(&push).await {
                error!(
                    "❌ [notify] push for {} not delivered: {e}",
                    transaction.sequence_number
                );
                return Err(ServiceError::NotifyFailed {
                    transaction: Box::new(transaction),
                    source: e,
                });
            }
        }

        Ok(transaction)
    }
}
