//! clashbot - Clash of Clans stats bot for Discord
//!
//! Answers `!player #TAG` and `!clan #TAG` with embeds built from the
//! Clash of Clans API.

mod coc;
mod common;
mod config;
mod discord;

use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use coc::CocClient;
use config::env::{get_config_path, mask_secret};
use config::load_and_validate;
use discord::DiscordBotBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    // Secrets and RUST_LOG may come from a local .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("clashbot v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Please set DISCORD_TOKEN and COC_API_KEY in the environment.");
        e
    })?;

    info!("Configuration loaded successfully");
    info!("  Discord Token: {}", mask_secret(&config.discord.token));
    info!("  COC API Key: {}", mask_secret(&config.api.key));
    info!("  API Base: {}", config.api.base_url);
    info!("  Prefix: {}", config.discord.prefix);

    let api = Arc::new(CocClient::from_config(&config.api)?);

    let bot = DiscordBotBuilder::new(
        config.discord.token.clone(),
        config.discord.prefix.clone(),
        api,
    )
    .build()
    .await
    .map_err(|e| {
        error!("Failed to start bot: {}", e);
        e
    })?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    info!("Starting bot...");
    let mut bot_task = tokio::spawn(bot.run(shutdown_rx));

    let finished = tokio::select! {
        biased;
        _ = shutdown_signal() => None,
        result = &mut bot_task => Some(result),
    };

    let result = match finished {
        Some(result) => result?,
        None => {
            info!("Shutdown signal received");
            if let Err(e) = shutdown_tx.send(true) {
                error!("Shutdown channel closed: {}", e);
            }
            bot_task.await?
        }
    };

    // A gateway failure is fatal: exit non-zero.
    result?;

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
