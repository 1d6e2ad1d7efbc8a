use crate::model::money::Money;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverbookingRequest {
    pub source_account: String,
    pub destination_account: String,
    pub amount: Money,
    pub fee: Money,
    pub remark: String,
}
