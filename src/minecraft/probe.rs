// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Single-shot TCP status probe

use std::future::Future;
use std::io::ErrorKind;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::ProbeError;

use super::protocol::{self, STATUS_PACKET_ID, STATUS_REQUEST};
use super::types::{PingTarget, ServerStatus};

/// One status round trip against a single server.
///
/// The configured timeout bounds each network step separately, so a
/// server that accepts quickly but then stalls still fails within one
/// timeout of the stall.
pub struct Pinger {
    target: PingTarget,
    timeout: Duration,
}

impl Pinger {
    /// Creates a prober for one target address
    #[must_use]
    pub fn new(target: PingTarget, timeout: Duration) -> Self {
        Self { target, timeout }
    }

    /// Performs the legacy status handshake and parses the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection fails, a step exceeds the
    /// configured timeout, or the response violates the wire format.
    /// The connection never outlives this call on any exit path.
    pub async fn fetch_status(&self) -> Result<ServerStatus, ProbeError> {
        tracing::trace!("Attempting TCP connection to: {}", self.target);
        let mut stream = self
            .step(TcpStream::connect((
                self.target.host.as_str(),
                self.target.port,
            )))
            .await??;
        tracing::trace!("TCP connection established to: {}", self.target);

        self.step(stream.write_all(&STATUS_REQUEST)).await??;

        let packet_id = self
            .step(stream.read_u8())
            .await?
            .map_err(eof_as_protocol)?;
        if packet_id != STATUS_PACKET_ID {
            return Err(ProbeError::protocol(format!(
                "Unexpected packet kind 0x{packet_id:02X}"
            )));
        }

        // Declared payload length in UTF-16 code units
        let unit_count = self
            .step(stream.read_u16())
            .await?
            .map_err(eof_as_protocol)?;
        if unit_count == 0 {
            return Err(ProbeError::protocol("Empty status response"));
        }

        let mut body = vec![0u8; usize::from(unit_count) * 2];
        self.step(stream.read_exact(&mut body))
            .await?
            .map_err(eof_as_protocol)?;

        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let payload = String::from_utf16_lossy(&units);
        tracing::trace!("Received status payload from {}: {}", self.target, payload);

        protocol::parse_status_payload(&payload)
    }

    async fn step<T>(&self, operation: impl Future<Output = T>) -> Result<T, ProbeError> {
        timeout(self.timeout, operation)
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout))
    }
}

/// A stream that ends mid-response is a malformed server, not a transport fault
fn eof_as_protocol(error: std::io::Error) -> ProbeError {
    if error.kind() == ErrorKind::UnexpectedEof {
        ProbeError::protocol("Status response ended early")
    } else {
        ProbeError::from(error)
    }
}
