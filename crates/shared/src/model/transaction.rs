use crate::model::money::Money;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const TRANSACTION_SUCCESS: &str = "SUCCESS";

/// Intrabank transfers carry no fee; the record keeps the literal "0".
pub const INTRABANK_FEE: &str = "0";

/// Durable proof of a transfer the core banking ledger confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub transaction_id: i32,
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
    pub created_at: Option<NaiveDateTime>,
}
