use crate::{domain::requests::session::SessionUser, model::transaction::TransactionModel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReceiptRequest {
    pub to: String,
    pub recipient_name: String,
    pub subject: String,
    pub body: String,
}

impl SendReceiptRequest {
    pub fn for_transaction(user: &SessionUser, transaction: &TransactionModel) -> Self {
        let body = format!(
            "Dear {name},\n\n\
             Your transfer has been processed.\n\n\
             Sequence number : {sequence}\n\
             Reference       : {reference}\n\
             From account    : {source}\n\
             To account      : {destination} ({destination_name})\n\
             Amount          : {amount}\n\
             Fee             : {fee}\n\
             Remark          : {remark}\n",
            name = user.name,
            sequence = transaction.sequence_number,
            reference = transaction.transaction_reference,
            source = transaction.source_account,
            destination = transaction.destination,
            destination_name = transaction.destination_name,
            amount = transaction.amount,
            fee = transaction.fee,
            remark = transaction.remarks,
        );

        Self {
            to: user.email.clone(),
            recipient_name: user.name.clone(),
            subject: format!("Transfer Receipt {}", transaction.sequence_number),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushNotificationRequest {
    pub user_id: i32,
    pub title: String,
    pub body: String,
}

impl PushNotificationRequest {
    pub fn for_transaction(user: &SessionUser, transaction: &TransactionModel) -> Self {
        Self {
            user_id: user.user_id,
            title: "Transfer Successful".to_string(),
            body: format!(
                "{} to {} amount {}",
                transaction.remarks, transaction.destination_name, transaction.amount
            ),
        }
    }
}
