use crate::model::{sequence::SequenceModel, transaction::TransactionModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct InquiryResponse {
    pub sequence_number: String,
    pub source_account: String,
    pub destination_account: String,
    pub source_name: String,
    pub destination_name: String,
}

impl From<SequenceModel> for InquiryResponse {
    fn from(value: SequenceModel) -> Self {
        InquiryResponse {
            sequence_number: value.sequence_number,
            source_account: value.source_account,
            destination_account: value.destination_account,
            source_name: value.source_name,
            destination_name: value.destination_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TransactionResponse {
    pub sequence_number: String,
    pub sequence_journal: String,
    pub transaction_reference: String,
    pub source_account: String,
    pub destination: String,
    pub destination_name: String,
    pub amount: i64,
    pub fee: String,
    pub remarks: String,
    pub status: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(value: TransactionModel) -> Self {
        TransactionResponse {
            sequence_number: value.sequence_number,
            sequence_journal: value.sequence_journal,
            transaction_reference: value.transaction_reference,
            source_account: value.source_account,
            destination: value.destination,
            destination_name: value.destination_name,
            amount: value.amount.value(),
            fee: value.fee,
            remarks: value.remarks,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
