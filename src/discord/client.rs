//! Discord bot client abstraction.
//!
//! Provides a high-level interface for creating and running the Discord bot,
//! hiding serenity implementation details from the rest of the application.

use std::sync::Arc;

use serenity::prelude::*;
use serenity::Client;
use tokio::sync::watch;
use tracing::{error, info};

use crate::coc::StatsApi;
use crate::discord::commands::CommandHandler;
use crate::discord::handler::BotHandler;

/// Builder for creating the Discord bot.
pub struct DiscordBotBuilder {
    token: String,
    prefix: String,
    api: Arc<dyn StatsApi>,
}

impl DiscordBotBuilder {
    /// Create a new Discord bot builder.
    pub fn new(token: impl Into<String>, prefix: impl Into<String>, api: Arc<dyn StatsApi>) -> Self {
        Self {
            token: token.into(),
            prefix: prefix.into(),
            api,
        }
    }

    /// Build the Discord bot.
    pub async fn build(self) -> anyhow::Result<DiscordBot> {
        let intents = GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let commands = Arc::new(CommandHandler::new(self.api, self.prefix));
        let handler = BotHandler::new(commands);

        let client = Client::builder(&self.token, intents)
            .event_handler(handler)
            .await?;

        Ok(DiscordBot { client })
    }
}

pub struct DiscordBot {
    client: Client,
}

impl DiscordBot {
    /// Run the gateway connection until it fails or `shutdown_rx` flips to `true`.
    ///
    /// A connection failure is returned to the caller; there is no reconnect loop.
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> anyhow::Result<()> {
        let shard_manager = self.client.shard_manager.clone();

        tokio::select! {
            result = self.client.start() => {
                result.map_err(|e| {
                    error!("Discord client error: {}", e);
                    anyhow::Error::from(e)
                })?;
                info!("Discord client disconnected normally");
            }
            _ = async {
                while shutdown_rx.changed().await.is_ok() {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                }
            } => {
                info!("Initiating graceful Discord shutdown...");
                shard_manager.shutdown_all().await;
                info!("Discord shutdown complete");
            }
        }

        Ok(())
    }
}
