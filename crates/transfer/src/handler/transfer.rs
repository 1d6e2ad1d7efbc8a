use crate::{
    metrics::{Metrics, Operation},
    middleware::{session::Session, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
};
use shared::{
    abstract_trait::transfer::service::{
        command::DynTransferCommandService, query::DynTransferQueryService,
    },
    domain::{
        requests::transfer::{InquiryRequest, PaymentRequest},
        responses::{ApiResponse, InquiryResponse, TransactionResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

#[utoipa::path(
    post,
    path = "/api/transfers/inquiry",
    tag = "Transfer",
    request_body = InquiryRequest,
    responses(
        (status = 200, description = "Sequence reserved", body = ApiResponse<InquiryResponse>),
        (status = 400, description = "Invalid amount, inactive account or bad input", body = ErrorResponse),
        (status = 503, description = "Core banking end of day in progress", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn inquiry(
    Extension(service): Extension<DynTransferCommandService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    SimpleValidatedJson(body): SimpleValidatedJson<InquiryRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let result = service.inquiry(&body).await;
    metrics.observe(Operation::Inquiry, &result);

    let sequence = result?;

    Ok(Json(ApiResponse {
        status: "success".to_string(),
        message: "Transfer inquiry succeeded".to_string(),
        data: InquiryResponse::from(sequence),
    }))
}

#[utoipa::path(
    post,
    path = "/api/transfers/payment",
    tag = "Transfer",
    request_body = PaymentRequest,
    params(
        ("x-user-id" = i32, Header, description = "Authenticated user id"),
        ("x-user-name" = String, Header, description = "Authenticated user name"),
        ("x-user-email" = String, Header, description = "Authenticated user email")
    ),
    responses(
        (status = 200, description = "Transfer executed; status `committed` when the receipt or notification was not delivered", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Invalid sequence number or amount", body = ErrorResponse),
        (status = 401, description = "No caller identity", body = ErrorResponse),
        (status = 409, description = "Sequence already paid or being paid", body = ErrorResponse),
        (status = 503, description = "Core banking end of day in progress", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn payment(
    Extension(service): Extension<DynTransferCommandService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    Session(caller): Session,
    SimpleValidatedJson(body): SimpleValidatedJson<PaymentRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let result = service.do_payment(&caller, &body).await;
    metrics.observe(Operation::Payment, &result);

    let transaction = result?;

    Ok(Json(ApiResponse {
        status: "success".to_string(),
        message: "Transfer succeeded".to_string(),
        data: TransactionResponse::from(transaction),
    }))
}

#[utoipa::path(
    get,
    path = "/api/transfers/{sequence_number}",
    tag = "Transfer",
    params(("sequence_number" = String, Path, description = "Sequence number returned by inquiry")),
    responses(
        (status = 200, description = "Recorded transfer", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "No transfer recorded for this sequence", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_transaction(
    Extension(service): Extension<DynTransferQueryService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    Path(sequence_number): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let result = service.find_transaction(&sequence_number).await;
    metrics.observe(Operation::Lookup, &result);

    let transaction = result?;

    Ok(Json(ApiResponse {
        status: "success".to_string(),
        message: "Transfer found".to_string(),
        data: TransactionResponse::from(transaction),
    }))
}

pub fn transfer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(inquiry))
        .routes(routes!(payment))
        .routes(routes!(get_transaction))
        .layer(Extension(
            app_state.di_container.transfer_command.service.clone(),
        ))
        .layer(Extension(app_state.di_container.transfer_query.service.clone()))
        .layer(Extension(app_state.metrics.clone()))
}
