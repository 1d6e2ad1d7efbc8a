mod transfer;

use crate::{config::SHUTDOWN_TIMEOUT, state::AppState};
use anyhow::{Context, Result};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::broadcast};
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::transfer::transfer_routes;

#[derive(OpenApi)]
#[openapi(
    info(title = "Transfer Service", description = "Intrabank transfer inquiry and payment"),
    tags((name = "Transfer", description = "Two-phase intrabank transfer"))
)]
struct ApiDoc;

async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "application/openmetrics-text; version=1.0.0; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("❌ Failed to encode metrics: {e:?}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> axum::Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(transfer_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .route(
                "/api-docs/openapi.json",
                get(move || {
                    let api = api.clone();
                    async move { Json(api) }
                }),
            )
            .route("/metrics", get(metrics_handler))
            .layer(Extension(shared_state))
            .layer(RequestBodyLimitLayer::new(64 * 1024))
            .layer(TimeoutLayer::new(SHUTDOWN_TIMEOUT))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(
        addr: SocketAddr,
        app_state: AppState,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<()> {
        let app = Self::build(app_state);

        let listener = TcpListener::bind(addr)
            .await
            .context(format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📚 OpenAPI document at /api-docs/openapi.json");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("HTTP server received shutdown signal");
            })
            .await
            .context("HTTP server failed")
    }
}
