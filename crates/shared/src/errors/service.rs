use crate::{
    errors::{GatewayError, NotificationError, RepositoryError},
    model::{money::Money, transaction::TransactionModel},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Core banking error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("End of day process is running")]
    EodInProgress,

    #[error("Source account is not active")]
    SourceAccountInactive,

    #[error("Destination account is not active")]
    DestinationAccountInactive,

    #[error("Amount {0} is outside the transaction limit")]
    InvalidAmount(Money),

    #[error("Invalid sequence number: {0}")]
    InvalidSequenceNumber(String),

    #[error("Sequence {0} is already being paid or has been paid")]
    SequenceAlreadyConsumed(String),

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("No transfer recorded for sequence {0}")]
    TransactionNotFound(String),

    #[error("Transfer {} committed but the receipt email was not sent: {source}", .transaction.sequence_number)]
    SendEmailFailed {
        transaction: Box<TransactionModel>,
        source: NotificationError,
    },

    #[error("Transfer {} committed but the push notification was not sent: {source}", .transaction.sequence_number)]
    NotifyFailed {
        transaction: Box<TransactionModel>,
        source: NotificationError,
    },

    #[error("Ledger move {transaction_reference} committed but not recorded: {source}")]
    LedgerCommittedUnrecorded {
        transaction_reference: String,
        source: RepositoryError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Failures raised before the overbooking call, or a refused overbooking
    /// whose claim was released. Repeating the request cannot move money twice.
    /// `Internal` is excluded: the ledger task may have died after the move.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::EodInProgress | ServiceError::Repo(_) | ServiceError::Gateway(_)
        )
    }

    /// The core banking ledger has already moved the money.
    pub fn ledger_committed(&self) -> bool {
        matches!(
            self,
            ServiceError::SendEmailFailed { .. }
                | ServiceError::NotifyFailed { .. }
                | ServiceError::LedgerCommittedUnrecorded { .. }
        )
    }

    /// The persisted transaction, for failures that happen after it was recorded.
    pub fn committed_transaction(&self) -> Option<&TransactionModel> {
        match self {
            ServiceError::SendEmailFailed { transaction, .. }
            | ServiceError::NotifyFailed { transaction, .. } => Some(transaction),
            _ => None,
        }
    }
}
