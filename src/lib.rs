use anyhow::{Context, Result};

pub mod ai;
pub mod api;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod messages;
pub mod state;
pub mod system_info;
pub mod tests;
pub mod twiml;
pub mod utils;

pub use ai::{prompts::PromptCatalog, Responder};
pub use api::router;
pub use commands::{Command, Inbound};
pub use config::Config;
pub use state::{AppState, TelegramChannel};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting sales assistant...");

    let catalog = config.prompt_catalog()?;
    tracing::info!(
        version = %catalog.version(),
        default_lang = %catalog.default_lang(),
        "Prompt catalog ready"
    );

    let responder = Responder::from_config(catalog, &config.ai);
    let state = AppState::from_config(&config, responder);
    if config.base_url.is_none() {
        tracing::warn!("No BASE_URL set - TwiML actions will use relative URLs");
    }

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for ctrl-c");
    }
}
