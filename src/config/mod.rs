// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Configuration module for the mcpinger application
//!
//! Loads and parses configuration from environment variables.


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
    pub const CHECK_INTERVAL_SECS: u64 = 60;
    pub const PROBE_TIMEOUT_MS: u64 = 2000;
    pub const ONLINE_TEXT: &str = "&aOnline";
    pub const OFFLINE_TEXT: &str = "&cOffline";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const CHECK_INTERVAL_SECONDS: &str = "CHECK_INTERVAL_SECONDS";
    pub const PROBE_TIMEOUT_MS: &str = "PROBE_TIMEOUT_MS";
    pub const ONLINE_TEXT: &str = "ONLINE_TEXT";
    pub const OFFLINE_TEXT: &str = "OFFLINE_TEXT";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub check_interval_secs: u64,
    pub probe_timeout_ms: u64,
    pub online_text: String,
    pub offline_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            check_interval_secs: defaults::CHECK_INTERVAL_SECS,
            probe_timeout_ms: defaults::PROBE_TIMEOUT_MS,
            online_text: defaults::ONLINE_TEXT.to_string(),
            offline_text: defaults::OFFLINE_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let check_interval_secs = positive_or_default(
            env_vars::CHECK_INTERVAL_SECONDS,
            std::env::var(env_vars::CHECK_INTERVAL_SECONDS).ok(),
            defaults::CHECK_INTERVAL_SECS,
        );

        let probe_timeout_ms = positive_or_default(
            env_vars::PROBE_TIMEOUT_MS,
            std::env::var(env_vars::PROBE_TIMEOUT_MS).ok(),
            defaults::PROBE_TIMEOUT_MS,
        );

        let online_text = std::env::var(env_vars::ONLINE_TEXT)
            .unwrap_or_else(|_| defaults::ONLINE_TEXT.to_string());
        let offline_text = std::env::var(env_vars::OFFLINE_TEXT)
            .unwrap_or_else(|_| defaults::OFFLINE_TEXT.to_string());

        Config {
            server_addr,
            check_interval_secs,
            probe_timeout_ms,
            online_text,
            offline_text,
        }
    }
}

/// Parses a positive integer setting, falling back to the default
/// when the value is missing, malformed, or zero.
fn positive_or_default(name: &str, value: Option<String>, default: u64) -> u64 {
    match value {
        Some(raw) => match raw.parse::<u64>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                tracing::warn!(
                    "Invalid value for {}: {:?}. Using default {}.",
                    name,
                    raw,
                    default
                );
                default
            }
        },
        None => default,
    }
}
