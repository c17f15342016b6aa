// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Type definitions for Minecraft server status

use std::fmt;

use serde::Serialize;

/// Resolved probe target address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingTarget {
    pub host: String,
    pub port: u16,
}

impl PingTarget {
    /// Port used when the key does not carry one
    pub const DEFAULT_PORT: u16 = 25565;

    /// Parses a cache key of the form `host` or `host:port`.
    ///
    /// The split happens at the last colon. A suffix that does not
    /// parse as a port leaves the whole key as the hostname.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        if let Some((host, port)) = key.rsplit_once(':') {
            if let Ok(port) = port.parse::<u16>() {
                return PingTarget {
                    host: host.to_string(),
                    port,
                };
            }
        }
        PingTarget {
            host: key.to_string(),
            port: Self::DEFAULT_PORT,
        }
    }
}

impl fmt::Display for PingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// One server status snapshot from a completed ping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerStatus {
    pub motd: String,
    pub players_online: i32,
    pub max_players: i32,
    pub ping_version: i32,
    pub protocol_version: i32,
    pub game_version: String,
}

impl Default for ServerStatus {
    // Numeric fields the server did not report read as -1
    fn default() -> Self {
        ServerStatus {
            motd: String::new(),
            players_online: -1,
            max_players: -1,
            ping_version: -1,
            protocol_version: -1,
            game_version: String::new(),
        }
    }
}
