// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Field lookups over cached server status
//!
//! Resolves identifiers of the form `<field>_<host:port>` to display
//! strings. Every recognized field resolves to some string: keys with
//! no completed probe yet fall back to a per-field default, so callers
//! never see an error.

use crate::cache::{ProbeOutcome, StatusCache};
use crate::config::Config;
use crate::minecraft::ServerStatus;

/// Status field addressable through a lookup identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Motd,
    PlayersOnline,
    MaxPlayers,
    PingVersion,
    GameVersion,
    Online,
}

impl StatusField {
    /// Parses a field name, accepting the historical aliases
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "motd" => Some(Self::Motd),
            "count" | "players" => Some(Self::PlayersOnline),
            "max" | "maxplayers" => Some(Self::MaxPlayers),
            "pingversion" | "pingv" => Some(Self::PingVersion),
            "gameversion" | "version" => Some(Self::GameVersion),
            "online" | "isonline" => Some(Self::Online),
            _ => None,
        }
    }

    /// Formats the outcome for this field, using the per-field default
    /// when no probe has completed successfully
    #[must_use]
    pub fn format(&self, outcome: &ProbeOutcome, config: &Config) -> String {
        match outcome {
            ProbeOutcome::Ready(status) => self.render(status, config),
            ProbeOutcome::Pending | ProbeOutcome::Failed(_) => self.default_text(config),
        }
    }

    fn render(&self, status: &ServerStatus, config: &Config) -> String {
        match self {
            Self::Motd => status.motd.clone(),
            Self::PlayersOnline => status.players_online.to_string(),
            Self::MaxPlayers => status.max_players.to_string(),
            Self::PingVersion => status.ping_version.to_string(),
            Self::GameVersion => status.game_version.clone(),
            Self::Online => config.online_text.clone(),
        }
    }

    fn default_text(&self, config: &Config) -> String {
        match self {
            Self::Motd | Self::GameVersion => String::new(),
            Self::PlayersOnline | Self::MaxPlayers => "0".to_string(),
            Self::PingVersion => "-1".to_string(),
            Self::Online => config.offline_text.clone(),
        }
    }
}

/// Splits `<field>_<key>` at the first underscore
#[must_use]
pub fn split_identifier(identifier: &str) -> Option<(&str, &str)> {
    identifier.split_once('_')
}

/// Resolves a lookup identifier against the cache.
///
/// Registers the key on first sight and triggers a stale refresh as a
/// side effect, then formats whatever outcome is currently available.
/// Returns `None` for malformed identifiers, unknown field names, and
/// a stopped cache.
pub async fn resolve(cache: &StatusCache, config: &Config, identifier: &str) -> Option<String> {
    let (field_name, key) = split_identifier(identifier)?;
    let field = StatusField::parse(field_name)?;

    let handle = cache.get(key).await.ok()?;
    let outcome = handle.poll().await;
    Some(field.format(&outcome, config))
}
