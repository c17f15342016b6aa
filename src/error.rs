//! Error types for the mcpinger application

use std::time::Duration;

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// The status cache has been stopped and must be rebuilt
    #[error("Status cache is stopped")]
    CacheStopped,

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a single status probe round trip.
///
/// Cloneable so a recorded failure can be handed out by the cache
/// on every poll until the next refresh cycle.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    /// TCP connect, reset, or lookup failure
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Connect or read exceeded the configured timeout
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// Malformed status response
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl ProbeError {
    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(error: std::io::Error) -> Self {
        Self::Connection(error.to_string())
    }
}
