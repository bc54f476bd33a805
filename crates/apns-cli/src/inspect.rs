//! Human-readable view of an encoded frame.

use bytes::Bytes;
use serde::Serialize;

use apns_core::error::{ApnsError, Result};
use apns_core::{decode_frame, Envelope};

#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub command: u8,
    pub identifier: i32,
    pub expiry: u32,
    pub token_len: usize,
    pub device_token: String,
    pub payload_len: usize,
    pub payload: serde_json::Value,
    pub frame_len: usize,
}

/// Parse a hex-encoded frame (whitespace ignored) into a report.
pub fn inspect_hex(input: &str) -> Result<FrameReport> {
    let cleaned: String = input.split_whitespace().collect();
    let raw = hex::decode(&cleaned)
        .map_err(|e| ApnsError::BadRequest(format!("frame is not valid hex: {e}")))?;
    inspect_bytes(Bytes::from(raw))
}

pub fn inspect_bytes(raw: Bytes) -> Result<FrameReport> {
    let frame_len = raw.len();
    let frame = decode_frame(raw)?;
    Ok(FrameReport {
        command: apns_core::protocol::PUSH_COMMAND_VALUE,
        identifier: frame.identifier,
        expiry: frame.expiry,
        token_len: frame.device_token.len(),
        device_token: frame.device_token_hex(),
        payload_len: frame.payload.len(),
        payload: frame.payload_value()?,
        frame_len,
    })
}

/// Encode an envelope and return the frame as lowercase hex.
pub fn encode_hex(env: &Envelope) -> Result<String> {
    Ok(hex::encode(env.to_bytes()?))
}
