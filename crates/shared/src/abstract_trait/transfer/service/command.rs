use crate::{
    domain::requests::{
        session::CallerContext,
        transfer::{InquiryRequest, PaymentRequest},
    },
    errors::ServiceError,
    model::{sequence::SequenceModel, transaction::TransactionModel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransferCommandService = Arc<dyn TransferCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransferCommandServiceTrait {
    async fn inquiry(&self, req: &InquiryRequest) -> Result<SequenceModel, ServiceError>;

    async fn do_payment(
        &self,
        caller: &CallerContext,
        req: &PaymentRequest,
    ) -> Result<TransactionModel, ServiceError>;
}
