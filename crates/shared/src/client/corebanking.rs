use crate::{
    abstract_trait::corebanking::CoreBankingGatewayTrait,
    config::HttpClientConfig,
    domain::{requests::corebanking::OverbookingRequest, responses::OverbookingResponse},
    errors::GatewayError,
    model::{
        account::{Account, AccountStatus},
        core_status::CoreStatus,
        money::Money,
    },
    utils::mask_account_number,
};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{error, info};

const SUCCESS_CODE: &str = "00";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    response_code: String,
    #[serde(default)]
    response_message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoreStatusDto {
    system_date: String,
    status: String,
    stand_in_status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountInquiryDto<'a> {
    account_number: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountDto {
    account_number: String,
    name: String,
    status: String,
    balance: String,
    min_balance: String,
    available_balance: String,
    cif: String,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    branch_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverbookingDto {
    journal_sequence: String,
    transaction_reference: String,
    #[serde(default)]
    ab_msg: String,
}

impl TryFrom<AccountDto> for Account {
    type Error = GatewayError;

    fn try_from(dto: AccountDto) -> Result<Self, Self::Error> {
        let money = |field: &str, raw: &str| {
            raw.parse::<Money>()
                .map_err(|e| GatewayError::Decode(format!("{field}: {e}")))
        };

        Ok(Account {
            balance: money("balance", &dto.balance)?,
            min_balance: money("minBalance", &dto.min_balance)?,
            available_balance: money("availableBalance", &dto.available_balance)?,
            status: AccountStatus::from_code(&dto.status),
            account_number: dto.account_number,
            name: dto.name,
            cif: dto.cif,
            currency: dto.currency,
            branch_code: dto.branch_code,
        })
    }
}

/// Core banking gateway over its JSON HTTP API.
pub struct CoreBankingClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoreBankingClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(config)?,
            base_url: config.base_url.clone(),
        })
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        operation: &str,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            error!("❌ {operation}: undecodable response (HTTP {status}): {e:?}");
            GatewayError::Decode(format!("{operation}: {e}"))
        })?;

        if envelope.response_code != SUCCESS_CODE {
            error!(
                "❌ {operation} rejected: code={} message={}",
                envelope.response_code, envelope.response_message
            );
            return Err(GatewayError::Rejected {
                code: envelope.response_code,
                message: envelope.response_message,
            });
        }

        if !status.is_success() {
            error!("❌ {operation}: success code on HTTP {status}");
            return Err(GatewayError::Rejected {
                code: status.as_u16().to_string(),
                message: envelope.response_message,
            });
        }

        envelope.data.ok_or_else(|| {
            error!("❌ {operation}: success code without data");
            GatewayError::Decode(format!("{operation}: missing data"))
        })
    }
}

#[async_trait]
impl CoreBankingGatewayTrait for CoreBankingClient {
    async fn get_core_status(&self) -> Result<CoreStatus, GatewayError> {
        let response = self
            .http
            .get(format!("{}/core/status", self.base_url))
            .send()
            .await
            .map_err(|e| {
                error!("❌ core status request failed: {e:?}");
                GatewayError::from(e)
            })?;

        let dto: CoreStatusDto = Self::unwrap_envelope("core status", response).await?;

        Ok(CoreStatus {
            system_date: dto.system_date,
            status: dto.status,
            stand_in_status: dto.stand_in_status,
        })
    }

    async fn get_account_details(&self, account_number: &str) -> Result<Account, GatewayError> {
        let response = self
            .http
            .post(format!("{}/accounts/inquiry", self.base_url))
            .json(&AccountInquiryDto { account_number })
            .send()
            .await
            .map_err(|e| {
                error!("❌ account inquiry request failed: {e:?}");
                GatewayError::from(e)
            })?;

        let dto: AccountDto = Self::unwrap_envelope("account inquiry", response).await?;

        Account::try_from(dto)
    }

    async fn perform_overbooking(
        &self,
        req: &OverbookingRequest,
    ) -> Result<OverbookingResponse, GatewayError> {
        info!(
            "🏦 Overbooking {} -> {}",
            mask_account_number(&req.source_account),
            mask_account_number(&req.destination_account)
        );

        let response = self
            .http
            .post(format!("{}/transfers/overbooking", self.base_url))
            .json(req)
            .send()
            .await
            .map_err(|e| {
                error!("❌ overbooking request failed: {e:?}");
                GatewayError::from(e)
            })?;

        let dto: OverbookingDto = Self::unwrap_envelope("overbooking", response).await?;

        Ok(OverbookingResponse {
            journal_sequence: dto.journal_sequence,
            transaction_reference: dto.transaction_reference,
            ab_msg: dto.ab_msg,
        })
    }
}
