// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Legacy server list ping wire helpers

use crate::error::ProbeError;

use super::types::ServerStatus;

/// Two-byte request that solicits a status response
pub const STATUS_REQUEST: [u8; 2] = [0xFE, 0x01];

/// Packet kind that must open a status response
pub const STATUS_PACKET_ID: u8 = 0xFF;

/// Section sign sentinel that marks the extended payload variant
pub const SECTION_SIGN: char = '\u{00A7}';

/// Field count of the NUL-delimited extended payload
const EXTENDED_FIELD_COUNT: usize = 6;

/// Field count of the section-sign-delimited legacy payload
const LEGACY_FIELD_COUNT: usize = 3;

// Length prefix counts UTF-16 code units - intentional truncation is part of the wire format
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn encode_status_response(payload: &str) -> Vec<u8> {
    let units: Vec<u16> = payload.encode_utf16().collect();
    let mut out = Vec::with_capacity(3 + units.len() * 2);
    out.push(STATUS_PACKET_ID);
    out.extend_from_slice(&(units.len() as u16).to_be_bytes());
    for unit in &units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Parses a decoded status payload into a [`ServerStatus`].
///
/// # Errors
///
/// Returns an error when the field count does not match either payload
/// variant, or a numeric field does not parse.
pub fn parse_status_payload(payload: &str) -> Result<ServerStatus, ProbeError> {
    if payload.starts_with(SECTION_SIGN) {
        parse_extended(payload)
    } else {
        parse_legacy(payload)
    }
}

/// Extended variant: `§pingVersion \0 protocolVersion \0 gameVersion \0 motd \0 players \0 max`
fn parse_extended(payload: &str) -> Result<ServerStatus, ProbeError> {
    let fields: Vec<&str> = payload.split('\0').collect();
    if fields.len() != EXTENDED_FIELD_COUNT {
        return Err(ProbeError::protocol(format!(
            "Expected {EXTENDED_FIELD_COUNT} fields in extended payload, got {}",
            fields.len()
        )));
    }

    let ping_version = fields[0].strip_prefix(SECTION_SIGN).unwrap_or(fields[0]);
    Ok(ServerStatus {
        motd: fields[3].to_string(),
        players_online: parse_numeric_field(fields[4])?,
        max_players: parse_numeric_field(fields[5])?,
        ping_version: parse_numeric_field(ping_version)?,
        protocol_version: parse_numeric_field(fields[1])?,
        game_version: fields[2].to_string(),
    })
}

/// Legacy variant: `motd § players § max`
fn parse_legacy(payload: &str) -> Result<ServerStatus, ProbeError> {
    let fields: Vec<&str> = payload.split(SECTION_SIGN).collect();
    if fields.len() != LEGACY_FIELD_COUNT {
        return Err(ProbeError::protocol(format!(
            "Expected {LEGACY_FIELD_COUNT} fields in legacy payload, got {}",
            fields.len()
        )));
    }

    Ok(ServerStatus {
        motd: fields[0].to_string(),
        players_online: parse_numeric_field(fields[1])?,
        max_players: parse_numeric_field(fields[2])?,
        ..ServerStatus::default()
    })
}

fn parse_numeric_field(field: &str) -> Result<i32, ProbeError> {
    field
        .parse()
        .map_err(|_| ProbeError::protocol(format!("Invalid numeric field {field:?}")))
}
