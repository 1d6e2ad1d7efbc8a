use serde::{Deserialize, Serialize};

/// Ledger confirmation returned by an overbooking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverbookingResponse {
    pub journal_sequence: String,
    pub transaction_reference: String,
    pub ab_msg: String,
}
