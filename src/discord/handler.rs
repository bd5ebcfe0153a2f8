//! Discord message event handling.
//!
//! Provides the event handler that turns incoming messages into command
//! invocations and delivers the replies to the originating channel.

use std::sync::Arc;

use serenity::all::{Colour, CreateEmbed, CreateMessage};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{debug, error, info};

use crate::coc::DisplayPanel;
use crate::discord::commands::{CommandHandler, Reply};

/// Discord event handler.
pub struct BotHandler {
    command_handler: Arc<CommandHandler>,
}

impl BotHandler {
    pub fn new(command_handler: Arc<CommandHandler>) -> Self {
        Self { command_handler }
    }

    async fn send_reply(&self, ctx: &Context, msg: &Message, reply: Reply) -> serenity::Result<()> {
        match reply {
            Reply::Text(text) => {
                msg.channel_id.say(&ctx.http, text).await?;
            }
            Reply::Panel(panel) => {
                let builder = CreateMessage::new().embed(panel_embed(&panel));
                msg.channel_id.send_message(&ctx.http, builder).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for BotHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore our own messages
        if msg.author.id == ctx.cache.current_user().id {
            return;
        }

        // Ignore bots
        if msg.author.bot {
            return;
        }

        let content = msg.content.trim();
        if !content.starts_with(self.command_handler.prefix()) {
            return;
        }

        debug!("Message received: {} from {}", content, msg.author.name);

        let Some(reply) = self.command_handler.handle_command(content).await else {
            debug!("Ignoring unknown command: {}", content);
            return;
        };

        info!(
            "{} from {} in channel {}",
            content, msg.author.name, msg.channel_id
        );

        if let Err(e) = self.send_reply(&ctx, &msg, reply).await {
            error!("Failed to send reply to channel {}: {}", msg.channel_id, e);
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} has connected to Discord!", ready.user.name);
        info!("Bot is ready to serve Clash of Clans data!");
    }
}

/// Convert a panel into a Discord embed.
pub fn panel_embed(panel: &DisplayPanel) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&panel.title)
        .colour(Colour::new(panel.color.rgb()));

    if let Some(description) = &panel.description {
        embed = embed.description(description);
    }

    embed.fields(
        panel
            .fields
            .iter()
            .map(|f| (f.label.clone(), f.value.clone(), f.inline)),
    )
}
