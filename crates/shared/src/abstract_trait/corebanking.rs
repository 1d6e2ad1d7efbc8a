use crate::{
    domain::{requests::corebanking::OverbookingRequest, responses::OverbookingResponse},
    errors::GatewayError,
    model::{account::Account, core_status::CoreStatus},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCoreBankingGateway = Arc<dyn CoreBankingGatewayTrait + Send + Sync>;

#[async_trait]
pub trait CoreBankingGatewayTrait {
    async fn get_core_status(&self) -> Result<CoreStatus, GatewayError>;
    async fn get_account_details(&self, account_number: &str) -> Result<Account, GatewayError>;
    async fn perform_overbooking(
        &self,
        req: &OverbookingRequest,
    ) -> Result<OverbookingResponse, GatewayError>;
}
