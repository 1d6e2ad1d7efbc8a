use crate::model::money::Money;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};

/// Bank tag embedded in every intrabank transfer remark.
pub const BANK_TAG: &str = "BNKYAYA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SequenceStatus {
    Reserved,
    Processing,
    Consumed,
}

impl SequenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceStatus::Reserved => "RESERVED",
            SequenceStatus::Processing => "PROCESSING",
            SequenceStatus::Consumed => "CONSUMED",
        }
    }
}

impl FromStr for SequenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(SequenceStatus::Reserved),
            "PROCESSING" => Ok(SequenceStatus::Processing),
            "CONSUMED" => Ok(SequenceStatus::Consumed),
            other => Err(format!("unknown sequence status '{other}'")),
        }
    }
}

impl fmt::Display for SequenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    IntrabankTransfer,
    AutoDebit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::IntrabankTransfer => "INTRABANK_TRANSFER",
            TransactionType::AutoDebit => "AUTO_DEBIT",
        }
    }
}

/// A reserved transfer intent, created by inquiry and redeemed once by payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SequenceModel {
    pub sequence_number: String,
    pub amount: Money,
    pub source_account: String,
    pub destination_account: String,
    pub source_name: String,
    pub destination_name: String,
    pub transaction_type: String,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

impl SequenceModel {
    /// A fresh intent. Names and number are filled in during inquiry.
    pub fn draft(
        amount: Money,
        source_account: &str,
        destination_account: &str,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            sequence_number: String::new(),
            amount,
            source_account: source_account.to_string(),
            destination_account: destination_account.to_string(),
            source_name: String::new(),
            destination_name: String::new(),
            transaction_type: transaction_type.as_str().to_string(),
            status: SequenceStatus::Reserved.as_str().to_string(),
            created_at: None,
        }
    }

    pub fn valid(&self, candidate: &str) -> bool {
        self.sequence_number == candidate
    }

    pub fn status(&self) -> Option<SequenceStatus> {
        self.status.parse().ok()
    }

    /// Ledger narrative, also reused in the receipt and the push notification.
    pub fn remark(&self) -> String {
        format!(
            "TRF {} {} {} {}",
            self.source_account, self.destination_account, BANK_TAG, self.sequence_number
        )
    }
}
