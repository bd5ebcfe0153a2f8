//! Panel formatting for player and clan records.
//!
//! Panels are built by appending fields in a fixed order. Optional fields
//! are guarded individually and skipped when their data is absent, so a
//! sparse record always yields a (shorter) panel instead of an error.

use crate::coc::models::{ClanRecord, NamedRef, PlayerRecord};

/// Clans are capped at this many members.
pub const MAX_CLAN_MEMBERS: u32 = 50;

/// How many clan labels are shown at most.
pub const MAX_LABELS: usize = 3;

/// Theme color of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelColor {
    Blue,
    Gold,
}

impl PanelColor {
    /// 24-bit RGB value.
    pub fn rgb(self) -> u32 {
        match self {
            PanelColor::Blue => 0x3498DB,
            PanelColor::Gold => 0xF1C40F,
        }
    }
}

/// A labelled value. `inline` fields may share a row with their neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelField {
    pub label: String,
    pub value: String,
    pub inline: bool,
}

/// Structured reply rendered by the chat client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPanel {
    pub title: String,
    pub description: Option<String>,
    pub color: PanelColor,
    pub fields: Vec<PanelField>,
}

impl DisplayPanel {
    pub fn new(title: impl Into<String>, color: PanelColor) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field that may share a row.
    pub fn inline(&mut self, label: &str, value: impl ToString) -> &mut Self {
        self.push(label, value, true)
    }

    /// Append a field that takes a full row.
    pub fn block(&mut self, label: &str, value: impl ToString) -> &mut Self {
        self.push(label, value, false)
    }

    fn push(&mut self, label: &str, value: impl ToString, inline: bool) -> &mut Self {
        self.fields.push(PanelField {
            label: label.to_string(),
            value: value.to_string(),
            inline,
        });
        self
    }

    /// Look up a field value by its label.
    #[cfg(test)]
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Build the panel for a player record.
pub fn player_panel(player: &PlayerRecord) -> DisplayPanel {
    let mut panel = DisplayPanel::new(
        format!("{} ({})", player.name, player.tag),
        PanelColor::Blue,
    );

    panel
        .inline("🏛️ Town Hall", or_na(player.town_hall_level))
        .inline(
            "🏆 Trophies",
            format!(
                "{}/{}",
                player.trophies.unwrap_or(0),
                or_na(player.best_trophies)
            ),
        )
        .inline("⭐ Level", or_na(player.exp_level));

    panel
        .inline("⚔️ War Stars", player.war_stars.unwrap_or(0))
        .inline("🎯 Attack Wins", player.attack_wins.unwrap_or(0))
        .inline("🛡️ Defense Wins", player.defense_wins.unwrap_or(0));

    if let Some(league) = &player.league {
        panel.inline("🏅 League", ref_name(league));
    }
    if let Some(war_league) = &player.war_league {
        panel.inline("🎖️ War League", ref_name(war_league));
    }

    if let Some(level) = player.builder_hall_level.filter(|&level| level > 0) {
        panel
            .inline("🔨 Builder Hall", level)
            .inline(
                "🏆 Versus Trophies",
                format!(
                    "{}/{}",
                    player.versus_trophies.unwrap_or(0),
                    player.best_versus_trophies.unwrap_or(0)
                ),
            )
            .inline("⚔️ Versus Wins", player.versus_battle_wins.unwrap_or(0));
    }

    if let Some(clan) = &player.clan {
        let role = capitalize(player.role.as_deref().unwrap_or("Member"));
        let name = clan.name.as_deref().unwrap_or("Unknown");
        panel.block("🏰 Clan", format!("{} ({})", name, role));
    }

    panel
        .inline("🎁 Donations", player.donations.unwrap_or(0))
        .inline("📥 Received", player.donations_received.unwrap_or(0));

    if let Some(gold) = player.clan_capital_contributions {
        panel.inline("🏛️ Capital Gold", gold);
    }

    panel
}

/// Build the panel for a clan record.
pub fn clan_panel(clan: &ClanRecord) -> DisplayPanel {
    let description = clan
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("No description");

    let mut panel = DisplayPanel::new(format!("{} ({})", clan.name, clan.tag), PanelColor::Gold)
        .with_description(description);

    panel
        .inline("⭐ Clan Level", or_na(clan.clan_level))
        .inline(
            "👥 Members",
            format!("{}/{}", clan.members.unwrap_or(0), MAX_CLAN_MEMBERS),
        )
        .inline("🏆 Clan Points", thousands(clan.clan_points.unwrap_or(0)));

    panel
        .inline(
            "🎯 Required Trophies",
            thousands(clan.required_trophies.unwrap_or(0)),
        )
        .inline(
            "🏛️ Required TH",
            clan.required_townhall_level
                .map(|level| level.to_string())
                .unwrap_or_else(|| "Any".to_string()),
        )
        .inline("🚪 Type", clan.clan_type.as_deref().unwrap_or("Unknown"));

    panel
        .inline("⚔️ War Wins", clan.war_wins.unwrap_or(0))
        .inline("📊 War Win Streak", clan.war_win_streak.unwrap_or(0))
        .inline(
            "🔄 War Frequency",
            clan.war_frequency.as_deref().unwrap_or("Unknown"),
        );

    if let Some(war_league) = &clan.war_league {
        panel.inline("🎖️ War League", ref_name(war_league));
    }

    if let Some(rate) = war_win_rate(
        clan.war_wins.unwrap_or(0),
        clan.war_losses.unwrap_or(0),
        clan.war_ties.unwrap_or(0),
    ) {
        panel.inline("📈 War Win Rate", rate);
    }

    if let Some(capital) = &clan.clan_capital {
        panel.inline("🏛️ Capital Hall", or_na(capital.capital_hall_level));
    }

    if let Some(labels) = clan.labels.as_ref().filter(|l| !l.is_empty()) {
        let names: Vec<&str> = labels.iter().take(MAX_LABELS).map(ref_name).collect();
        panel.block("🏷️ Labels", names.join(", "));
    }

    if let Some(location) = &clan.location {
        let mut text = location.name.clone().unwrap_or_else(|| "Unknown".to_string());
        if location.country_marker {
            text.push(' ');
            text.push_str(location.country_code.as_deref().unwrap_or(""));
        }
        panel.inline("🌍 Location", text);
    }

    panel
}

/// `"{rate:.1}% ({w}W-{l}L-{t}T)"`, or `None` when no wars were fought.
pub fn war_win_rate(wins: u32, losses: u32, ties: u32) -> Option<String> {
    let total = u64::from(wins) + u64::from(losses) + u64::from(ties);
    if total == 0 {
        return None;
    }
    let rate = f64::from(wins) / total as f64 * 100.0;
    Some(format!("{:.1}% ({}W-{}L-{}T)", rate, wins, losses, ties))
}

/// Format with `,` thousands separators.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn or_na(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn ref_name(named: &NamedRef) -> &str {
    named.name.as_deref().unwrap_or("Unknown")
}
