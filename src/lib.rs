// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! # mcpinger
//!
//! Self-refreshing cache of Minecraft server status.
//!
//! Probes servers over the legacy server list ping protocol, caches the
//! results per `host:port` key, and exposes them through field lookups
//! and a small HTTP API. Probes refresh lazily on access once the
//! configured interval has elapsed.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `cache`: self-refreshing probe cache
//! - `config`: configuration management
//! - `error`: error types
//! - `lookup`: field lookups over cached status
//! - `minecraft`: legacy server list ping client
//! - `prelude`: commonly used types and traits

mod api;
mod cache;
mod config;
mod error;
mod lookup;
mod minecraft;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result types
pub use error::{AppError, ProbeError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Self-refreshing status cache
pub use cache::{ProbeHandle, ProbeOutcome, StatusCache};

/// Field lookups over cached status
pub use lookup::{StatusField, resolve, split_identifier};

/// Legacy ping client types
pub use minecraft::{PingTarget, Pinger, ServerStatus};

/// Status response wire encoding (public for tests)
pub use minecraft::{STATUS_PACKET_ID, STATUS_REQUEST, encode_status_response};
