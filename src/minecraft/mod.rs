//! Legacy Minecraft server list ping client module
//!
//! Implements the pre-Netty status handshake used to query a server's
//! message of the day, player counts, and version information.

mod probe;
mod protocol;
mod types;

// Re-export public types and functions
pub use probe::Pinger;
pub use protocol::{STATUS_PACKET_ID, STATUS_REQUEST, encode_status_response};
pub use types::{PingTarget, ServerStatus};
