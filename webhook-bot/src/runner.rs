use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, instrument};
use webhook_core::{init_tracing, PlatformClient};

use crate::config::BotConfig;
use crate::dispatcher::Dispatcher;
use crate::platform::{mask_token, HttpPlatformClient};
use crate::server::{router, AppState};

/// Builds the router for `config` with the given platform client, without binding a socket.
/// Used by integration tests that inject a mock platform client.
pub fn build_app(config: &BotConfig, platform: Arc<dyn PlatformClient>) -> axum::Router {
    let dispatcher = Arc::new(Dispatcher::new(platform));
    router(&config.webhook_path(), AppState::new(dispatcher))
}

/// Main entry: validate config, init logging, build the HTTP platform client and router, then serve
/// until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_server(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file.as_deref())?;

    let addr = config.socket_addr()?;
    let platform = Arc::new(HttpPlatformClient::new(config.api_url(), config.bot_token.clone()));
    let app = build_app(&config, platform);

    info!(
        addr = %addr,
        api_url = %config.api_url(),
        token = %mask_token(&config.bot_token),
        "Webhook server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
