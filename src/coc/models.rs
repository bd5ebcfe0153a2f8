//! Records returned by the Clash of Clans API.
//!
//! Only `name` and `tag` are required. Every other field may be absent and
//! is defaulted by the panel formatter, never here.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Any `{ "name": ... }` object (leagues, labels, clans).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NamedRef {
    pub name: Option<String>,
}

/// Clan summary embedded in a player record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerClan {
    pub name: Option<String>,
}

/// `GET /players/{tag}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub tag: String,
    pub town_hall_level: Option<u32>,
    pub exp_level: Option<u32>,
    pub trophies: Option<u32>,
    pub best_trophies: Option<u32>,
    pub war_stars: Option<u32>,
    pub attack_wins: Option<u32>,
    pub defense_wins: Option<u32>,
    pub builder_hall_level: Option<u32>,
    pub versus_trophies: Option<u32>,
    pub best_versus_trophies: Option<u32>,
    pub versus_battle_wins: Option<u32>,
    pub role: Option<String>,
    pub donations: Option<u32>,
    pub donations_received: Option<u32>,
    pub clan_capital_contributions: Option<u64>,
    pub league: Option<NamedRef>,
    pub war_league: Option<NamedRef>,
    pub clan: Option<PlayerClan>,
}

/// Clan capital summary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanCapital {
    pub capital_hall_level: Option<u32>,
}

/// Clan location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: Option<String>,
    /// Set whenever an `isCountry` key is present, whatever its value (even `null`).
    #[serde(rename = "isCountry", default, deserialize_with = "key_present")]
    pub country_marker: bool,
    pub country_code: Option<String>,
}

fn key_present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

/// `GET /clans/{tag}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanRecord {
    pub name: String,
    pub tag: String,
    pub description: Option<String>,
    pub clan_level: Option<u32>,
    pub members: Option<u32>,
    pub clan_points: Option<u64>,
    pub required_trophies: Option<u64>,
    pub required_townhall_level: Option<u32>,
    #[serde(rename = "type")]
    pub clan_type: Option<String>,
    pub war_wins: Option<u32>,
    pub war_win_streak: Option<u32>,
    pub war_losses: Option<u32>,
    pub war_ties: Option<u32>,
    pub war_frequency: Option<String>,
    pub war_league: Option<NamedRef>,
    pub clan_capital: Option<ClanCapital>,
    pub labels: Option<Vec<NamedRef>>,
    pub location: Option<Location>,
}
