use anyhow::{Context, Result};
use shared::{
    config::{Config, ConnectionManager},
    utils::{Logger, shutdown_signal},
};
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use transfer::{
    config::{SHUTDOWN_TIMEOUT, ServerConfig},
    handler::AppRouter,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    let server_config = ServerConfig::from_config(&config)?;

    let logger = Logger::new("transfer-service", server_config.is_dev)
        .context("Failed to initialize logger")?;

    let db_pool = ConnectionManager::new_pool(&server_config.database)
        .await
        .context("Failed to initialize database pool")?;

    let (state, reconciliation_worker) =
        AppState::new(db_pool, &config).context("Failed to create AppState")?;

    let (shutdown_tx, _) = broadcast::channel(1);

    let worker_handle = tokio::spawn(reconciliation_worker.run(shutdown_tx.subscribe()));

    let http_addr = server_config.http_addr;
    let http_shutdown_rx = shutdown_tx.subscribe();
    let http_failure_tx = shutdown_tx.clone();
    let http_handle = tokio::spawn(async move {
        if let Err(e) = AppRouter::serve(http_addr, state, http_shutdown_rx).await {
            error!("❌ HTTP server failed: {e:?}");
            let _ = http_failure_tx.send(());
        }
    });

    let signal_shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        if let Err(e) = signal_shutdown_tx.send(()) {
            warn!("Failed to send shutdown signal: {e:?}");
        }
    });

    let mut shutdown_rx = shutdown_tx.subscribe();
    let _ = shutdown_rx.recv().await;

    info!("🛑 Shutting down transfer service...");

    let shutdown_result = tokio::time::timeout(SHUTDOWN_TIMEOUT, async {
        let _ = tokio::join!(http_handle, worker_handle);
    })
    .await;

    match shutdown_result {
        Ok(_) => info!("✅ HTTP server and reconciliation worker stopped gracefully"),
        Err(_) => warn!("⚠️  Shutdown timeout reached, forcing exit"),
    }

    info!("✅ Transfer service shutdown complete.");
    logger.shutdown();

    Ok(())
}
