//! Discord bot integration.
//!
//! This module provides the Discord side of the bot: the serenity client,
//! the message event handler and the command implementations.

pub mod client;
pub mod commands;
pub mod handler;

pub use client::DiscordBotBuilder;
