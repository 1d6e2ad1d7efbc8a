use crate::model::{
    money::Money,
    sequence::{SequenceModel, TransactionType},
    transaction::{INTRABANK_FEE, TRANSACTION_SUCCESS},
};
use crate::domain::responses::OverbookingResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_distinct_accounts"))]
pub struct InquiryRequest {
    #[schema(value_type = i64, example = 100000)]
    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Money,

    #[validate(length(min = 1, max = 34, message = "Source account is required"))]
    pub source_account: String,

    #[validate(length(min = 1, max = 34, message = "Destination account is required"))]
    pub destination_account: String,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "INTRABANK_TRANSFER")]
    pub transaction_type: Option<TransactionType>,
}

fn validate_positive_amount(amount: &Money) -> Result<(), ValidationError> {
    if *amount == Money::ZERO {
        return Err(ValidationError::new("range").with_message("Amount must be greater than 0".into()));
    }
    Ok(())
}

fn validate_distinct_accounts(req: &InquiryRequest) -> Result<(), ValidationError> {
    if req.source_account.trim() == req.destination_account.trim() {
        return Err(ValidationError::new("same_account")
            .with_message("Source and destination accounts must differ".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PaymentRequest {
    #[validate(length(min = 1, message = "Sequence number is required"))]
    pub sequence_number: String,
}

/// Row written once the ledger confirmed the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub sequence_number: String,
    pub sequence_journal: String,
    pub transaction_reference: String,
    pub source_account: String,
    pub destination: String,
    pub amount: Money,
    pub fee: String,
    pub remarks: String,
    pub status: String,
    pub destination_name: String,
    pub user_id: Option<i32>,
}

impl CreateTransactionRequest {
    pub fn confirmed(sequence: &SequenceModel, ledger: &OverbookingResponse) -> Self {
        Self {
            sequence_number: sequence.sequence_number.clone(),
            sequence_journal: ledger.journal_sequence.clone(),
            transaction_reference: ledger.transaction_reference.clone(),
            source_account: sequence.source_account.clone(),
            destination: sequence.destination_account.clone(),
            amount: sequence.amount,
            fee: INTRABANK_FEE.to_string(),
            remarks: sequence.remark(),
            status: TRANSACTION_SUCCESS.to_string(),
            destination_name: sequence.destination_name.clone(),
            user_id: None,
        }
    }
}
