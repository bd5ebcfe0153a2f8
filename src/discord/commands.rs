//! Discord bot commands (!ping, !player, !clan, !help).
//!
//! Handles command parsing and execution. Every invocation is independent
//! and always ends in a reply; lookup failures are turned into text here
//! and never reach the event handler.

use std::sync::Arc;

use tracing::{debug, info};

use crate::coc::{clan_panel, player_panel, DisplayPanel, EntityKind, EntityTag, StatsApi};
use crate::common::error::{ApiError, CommandError};

/// Fixed reply to `ping`.
pub const PING_REPLY: &str = "Pong! Bot is working!";

/// What a command hands back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain message content.
    Text(String),
    /// Rendered as an embed.
    Panel(DisplayPanel),
}

/// A parsed command invocation: lower-cased name plus argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub command: String,
    pub args: Vec<&'a str>,
}

/// Split `content` into command and arguments if it starts with `prefix`.
pub fn parse_invocation<'a>(content: &'a str, prefix: &str) -> Option<Invocation<'a>> {
    let rest = content.trim().strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let command = tokens.next()?.to_lowercase();

    Some(Invocation {
        command,
        args: tokens.collect(),
    })
}

/// Command handler for the Discord bot.
pub struct CommandHandler {
    api: Arc<dyn StatsApi>,
    prefix: String,
}

impl CommandHandler {
    pub fn new(api: Arc<dyn StatsApi>, prefix: impl Into<String>) -> Self {
        Self {
            api,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse and execute a command.
    ///
    /// Returns `None` if the content is not a known command.
    pub async fn handle_command(&self, content: &str) -> Option<Reply> {
        let invocation = parse_invocation(content, &self.prefix)?;
        debug!(
            "Processing command: {} with args: {:?}",
            invocation.command, invocation.args
        );

        let reply = match invocation.command.as_str() {
            "ping" => Reply::Text(PING_REPLY.to_string()),
            "player" => self.handle_lookup(EntityKind::Player, &invocation.args).await,
            "clan" => self.handle_lookup(EntityKind::Clan, &invocation.args).await,
            "help" => Reply::Text(self.help_text()),
            _ => return None,
        };

        Some(reply)
    }

    /// Handle !player and !clan.
    async fn handle_lookup(&self, kind: EntityKind, args: &[&str]) -> Reply {
        let tag = match self.parse_tag(kind, args) {
            Ok(tag) => tag,
            Err(CommandError::InvalidArgument(message)) => return Reply::Text(message),
        };

        info!("Looking up {} {}", kind.command(), tag);

        let result = match kind {
            EntityKind::Player => self.api.fetch_player(&tag).await.map(|p| player_panel(&p)),
            EntityKind::Clan => self.api.fetch_clan(&tag).await.map(|c| clan_panel(&c)),
        };

        match result {
            Ok(panel) => Reply::Panel(panel),
            Err(e) => Reply::Text(error_reply(kind, &e)),
        }
    }

    /// Exactly one argument, starting with `#`.
    fn parse_tag(&self, kind: EntityKind, args: &[&str]) -> Result<EntityTag, CommandError> {
        let [raw] = args else {
            return Err(CommandError::InvalidArgument(format!(
                "Usage: {}{} #TAG",
                self.prefix,
                kind.command()
            )));
        };

        EntityTag::new(raw).ok_or_else(|| {
            CommandError::InvalidArgument(format!("{} tag must start with #", kind.noun()))
        })
    }

    fn help_text(&self) -> String {
        let p = &self.prefix;
        format!(
            "**Available Commands:**\n\
             • `{p}ping` - Test if bot is responding\n\
             • `{p}player #TAG` - Get player info by tag\n\
             • `{p}clan #TAG` - Get clan info by tag\n\
             • `{p}help` - Show this help message"
        )
    }
}

/// User-facing text for a failed lookup.
pub fn error_reply(kind: EntityKind, error: &ApiError) -> String {
    match error {
        ApiError::NotFound => format!("{} not found!", kind.noun()),
        ApiError::Unexpected(status) => format!("Error: {}", status),
        ApiError::Transport(message) | ApiError::Decode(message) => {
            format!("An error occurred: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::coc::models::{ClanRecord, PlayerRecord};
    use crate::coc::panel::PanelColor;
    use crate::common::error::ApiResult;

    struct FakeApi {
        player: fn() -> ApiResult<PlayerRecord>,
        clan: fn() -> ApiResult<ClanRecord>,
        tags: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn new(player: fn() -> ApiResult<PlayerRecord>, clan: fn() -> ApiResult<ClanRecord>) -> Arc<Self> {
            Arc::new(Self {
                player,
                clan,
                tags: Mutex::new(Vec::new()),
            })
        }

        fn record(&self, tag: &EntityTag) {
            self.tags.lock().unwrap().push(tag.to_string());
        }

        fn tags(&self) -> Vec<String> {
            self.tags.lock().unwrap().clone()
        }

        fn calls(&self) -> usize {
            self.tags.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StatsApi for FakeApi {
        async fn fetch_player(&self, tag: &EntityTag) -> ApiResult<PlayerRecord> {
            self.record(tag);
            (self.player)()
        }

        async fn fetch_clan(&self, tag: &EntityTag) -> ApiResult<ClanRecord> {
            self.record(tag);
            (self.clan)()
        }
    }

    fn some_player() -> ApiResult<PlayerRecord> {
        Ok(serde_json::from_str(r##"{"name":"Chief","tag":"#ABC","townHallLevel":12}"##).unwrap())
    }

    fn some_clan() -> ApiResult<ClanRecord> {
        Ok(serde_json::from_str(r##"{"name":"Reddit","tag":"#XYZ","warWins":10,"warLosses":5,"warTies":1}"##).unwrap())
    }

    fn not_found<T>() -> ApiResult<T> {
        Err(ApiError::NotFound)
    }

    fn handler(api: Arc<FakeApi>) -> CommandHandler {
        CommandHandler::new(api, "!")
    }

    fn text(reply: Option<Reply>) -> String {
        match reply {
            Some(Reply::Text(text)) => text,
            other => panic!("expected text reply, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invocation() {
        let invocation = parse_invocation("!Player  #ABC ", "!").unwrap();
        assert_eq!(invocation.command, "player");
        assert_eq!(invocation.args, vec!["#ABC"]);

        assert!(parse_invocation("hello !ping", "!").is_none());
        assert!(parse_invocation("!", "!").is_none());
        assert!(parse_invocation("?ping", "!").is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let api = FakeApi::new(some_player, some_clan);
        let reply = handler(api.clone()).handle_command("!ping").await;

        assert_eq!(text(reply), PING_REPLY);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_command_is_ignored() {
        let api = FakeApi::new(some_player, some_clan);
        assert!(handler(api).handle_command("!war #ABC").await.is_none());
    }

    #[tokio::test]
    async fn test_tag_without_hash_never_calls_api() {
        let api = FakeApi::new(some_player, some_clan);
        let handler = handler(api.clone());

        for (content, expected) in [
            ("!player ABC", "Player tag must start with #"),
            ("!clan 2PP0JCL", "Clan tag must start with #"),
            ("!clan abc#", "Clan tag must start with #"),
        ] {
            assert_eq!(text(handler.handle_command(content).await), expected);
        }
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_wrong_argument_count_replies_usage() {
        let api = FakeApi::new(some_player, some_clan);
        let handler = handler(api.clone());

        assert_eq!(text(handler.handle_command("!player").await), "Usage: !player #TAG");
        assert_eq!(text(handler.handle_command("!clan #A #B").await), "Usage: !clan #TAG");
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_player_lookup_returns_panel() {
        let api = FakeApi::new(some_player, some_clan);
        let reply = handler(api.clone()).handle_command("!player #ABC").await;

        match reply {
            Some(Reply::Panel(panel)) => {
                assert_eq!(panel.title, "Chief (#ABC)");
                assert_eq!(panel.color, PanelColor::Blue);
            }
            other => panic!("expected panel, got {:?}", other),
        }
        assert_eq!(api.tags(), vec!["#ABC"]);
    }

    #[tokio::test]
    async fn test_clan_lookup_returns_panel() {
        let api = FakeApi::new(some_player, some_clan);
        let reply = handler(api.clone()).handle_command("!clan #2PP0JCL").await;

        match reply {
            Some(Reply::Panel(panel)) => {
                assert_eq!(panel.field("📈 War Win Rate"), Some("62.5% (10W-5L-1T)"));
            }
            other => panic!("expected panel, got {:?}", other),
        }
        assert_eq!(api.tags(), vec!["#2PP0JCL"]);
    }

    #[tokio::test]
    async fn test_clan_not_found() {
        let api = FakeApi::new(some_player, not_found);
        let reply = handler(api).handle_command("!clan #XYZ").await;

        assert_eq!(text(reply), "Clan not found!");
    }

    #[tokio::test]
    async fn test_player_not_found() {
        let api = FakeApi::new(not_found, some_clan);
        let reply = handler(api).handle_command("!player #XYZ").await;

        assert_eq!(text(reply), "Player not found!");
    }

    #[tokio::test]
    async fn test_unexpected_status_includes_code() {
        let api = FakeApi::new(|| Err(ApiError::Unexpected(503)), some_clan);
        let reply = handler(api).handle_command("!player #ABC").await;

        assert_eq!(text(reply), "Error: 503");
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_reply() {
        let api = FakeApi::new(
            || Err(ApiError::Transport("error sending request: connection refused".into())),
            some_clan,
        );
        let reply = handler(api).handle_command("!player #ABC").await;

        assert_eq!(
            text(reply),
            "An error occurred: error sending request: connection refused"
        );
    }

    #[tokio::test]
    async fn test_decode_failure_becomes_reply() {
        let api = FakeApi::new(some_player, || Err(ApiError::Decode("invalid type: string".into())));
        let reply = handler(api).handle_command("!clan #ABC").await;

        assert_eq!(text(reply), "An error occurred: invalid type: string");
    }

    #[tokio::test]
    async fn test_help_uses_configured_prefix() {
        let api = FakeApi::new(some_player, some_clan);
        let handler = CommandHandler::new(api, "?");

        let help = text(handler.handle_command("?help").await);
        assert!(help.contains("`?player #TAG`"));
        assert!(help.contains("`?clan #TAG`"));
        assert!(help.contains("`?ping`"));
    }
}
