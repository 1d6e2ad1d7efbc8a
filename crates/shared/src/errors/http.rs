use crate::{
    domain::responses::{ApiResponse, TransactionResponse},
    errors::{ErrorResponse, RepositoryError, ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl AppErrorHttp {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_)
            | ServiceError::SourceAccountInactive
            | ServiceError::DestinationAccountInactive
            | ServiceError::InvalidAmount(_)
            | ServiceError::InvalidSequenceNumber(_) => StatusCode::BAD_REQUEST,
            ServiceError::SequenceAlreadyConsumed(_) => StatusCode::CONFLICT,
            ServiceError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ServiceError::EodInProgress => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::TransactionNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::SendEmailFailed { .. } | ServiceError::NotifyFailed { .. } => {
                StatusCode::OK
            }
            ServiceError::Repo(_)
            | ServiceError::Gateway(_)
            | ServiceError::LedgerCommittedUnrecorded { .. }
            | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self.0 {
            ServiceError::SendEmailFailed { transaction, source } => {
                warn!("📧 Transfer committed, receipt email undelivered: {source}");
                let body = Json(ApiResponse {
                    status: "committed".to_string(),
                    message: "Transfer succeeded but the receipt email could not be sent"
                        .to_string(),
                    data: TransactionResponse::from(*transaction),
                });
                return (status, body).into_response();
            }
            ServiceError::NotifyFailed { transaction, source } => {
                warn!("🔔 Transfer committed, push notification undelivered: {source}");
                let body = Json(ApiResponse {
                    status: "committed".to_string(),
                    message: "Transfer succeeded but the notification could not be sent"
                        .to_string(),
                    data: TransactionResponse::from(*transaction),
                });
                return (status, body).into_response();
            }
            ServiceError::Validation(errors) => {
                info!("📝 Validation failed: {errors:?}");
                format!("Validation failed: {}", errors.join(", "))
            }
            ServiceError::TransactionNotFound(_) => "Transaction not found".to_string(),
            ServiceError::LedgerCommittedUnrecorded {
                transaction_reference,
                source,
            } => {
                error!("🧾 Ledger move {transaction_reference} awaiting reconciliation: {source}");
                "Transfer is being processed, check its status later".to_string()
            }
            ServiceError::Repo(err) => {
                error!("💾 Repository error: {err}");
                "Internal server error".to_string()
            }
            ServiceError::Gateway(err) => {
                error!("🏦 Core banking error: {err}");
                "Internal server error".to_string()
            }
            ServiceError::Internal(msg) => {
                error!("🔥 Internal error: {msg}");
                "Internal server error".to_string()
            }
            other => {
                warn!("⚠️ {other}");
                other.to_string()
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message,
        });

        (status, body).into_response()
    }
}
