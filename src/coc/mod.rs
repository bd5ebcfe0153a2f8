//! Clash of Clans API access and panel formatting.

pub mod client;
pub mod models;
pub mod panel;
pub mod tag;

pub use client::{CocClient, StatsApi};
pub use panel::{clan_panel, player_panel, DisplayPanel};
pub use tag::{EntityKind, EntityTag};
