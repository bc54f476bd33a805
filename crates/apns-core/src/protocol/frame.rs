//! Legacy binary frame (command 1) encoding and parsing.
//!
//! Layout, all integers big-endian, no padding:
//!
//! ```text
//! | cmd u8 | identifier u32 | expiry u32 | token_len u16 | token | payload_len u16 | payload |
//! ```
//!
//! Parsing rules:
//! - Never index (`buf[0]`); always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::envelope::Envelope;
use super::{MAX_PAYLOAD_SIZE_BYTES, PUSH_COMMAND_VALUE};
use crate::error::{ApnsError, Result};

/// Fixed bytes around the two variable fields: cmd + identifier + expiry + two length slots.
pub const FRAME_OVERHEAD_BYTES: usize = 1 + 4 + 4 + 2 + 2;

/// Encode an envelope into the bytes the gateway expects.
///
/// Reflects the envelope's state at call time. On any error nothing is
/// produced: the token is checked first, then serialization, then size.
pub fn encode_frame(env: &Envelope) -> Result<Bytes> {
    let token = hex::decode(&env.device_token)?;
    let token_len = u16::try_from(token.len()).map_err(|_| {
        ApnsError::InvalidDeviceToken(format!("token is {} bytes", token.len()))
    })?;

    let payload = env.payload_json()?;
    if payload.len() > MAX_PAYLOAD_SIZE_BYTES {
        tracing::debug!(
            identifier = env.identifier,
            size = payload.len(),
            limit = MAX_PAYLOAD_SIZE_BYTES,
            "payload rejected"
        );
        return Err(ApnsError::PayloadTooLarge {
            size: payload.len(),
            limit: MAX_PAYLOAD_SIZE_BYTES,
        });
    }
    // Bounded by the size check above.
    let payload_len = payload.len() as u16;

    let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD_BYTES + token.len() + payload.len());
    buf.put_u8(PUSH_COMMAND_VALUE);
    // Two's-complement bit pattern; negative ids are not rejected.
    buf.put_u32(env.identifier as u32);
    buf.put_u32(env.expiry);
    buf.put_u16(token_len);
    buf.put_slice(&token);
    buf.put_u16(payload_len);
    buf.put_slice(&payload);

    tracing::trace!(
        identifier = env.identifier,
        token_len,
        payload_len,
        frame_len = buf.len(),
        "frame encoded"
    );
    Ok(buf.freeze())
}

impl Envelope {
    /// The complete frame for this envelope. See [`encode_frame`].
    pub fn to_bytes(&self) -> Result<Bytes> {
        encode_frame(self)
    }
}

/// A parsed command-1 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub identifier: i32,
    pub expiry: u32,
    /// Raw token bytes (zero-copy).
    pub device_token: Bytes,
    /// Raw JSON payload bytes (zero-copy).
    pub payload: Bytes,
}

impl DecodedFrame {
    pub fn device_token_hex(&self) -> String {
        hex::encode(&self.device_token)
    }

    /// Parse the payload bytes as JSON.
    pub fn payload_value(&self) -> Result<serde_json::Value> {
        serde_json::from_slice(&self.payload)
            .map_err(|e| ApnsError::BadRequest(format!("invalid payload json: {e}")))
    }
}

/// Decode a command-1 frame. The whole buffer must be exactly one frame.
pub fn decode_frame(mut buf: Bytes) -> Result<DecodedFrame> {
    // cmd, identifier, expiry, token_len
    if buf.remaining() < 11 {
        return Err(ApnsError::BadRequest("frame too short".into()));
    }

    let cmd = buf.get_u8();
    if cmd != PUSH_COMMAND_VALUE {
        return Err(ApnsError::UnsupportedVersion);
    }

    let identifier = buf.get_u32() as i32;
    let expiry = buf.get_u32();

    let token_len = usize::from(buf.get_u16());
    if buf.remaining() < token_len {
        return Err(ApnsError::BadRequest("truncated device token".into()));
    }
    let device_token = buf.copy_to_bytes(token_len);

    if buf.remaining() < 2 {
        return Err(ApnsError::BadRequest("missing payload length".into()));
    }
    let payload_len = usize::from(buf.get_u16());
    if payload_len > MAX_PAYLOAD_SIZE_BYTES {
        return Err(ApnsError::PayloadTooLarge {
            size: payload_len,
            limit: MAX_PAYLOAD_SIZE_BYTES,
        });
    }
    if buf.remaining() < payload_len {
        return Err(ApnsError::BadRequest("truncated payload".into()));
    }
    let payload = buf.copy_to_bytes(payload_len);

    if buf.has_remaining() {
        return Err(ApnsError::BadRequest(format!(
            "{} trailing bytes after frame",
            buf.remaining()
        )));
    }

    Ok(DecodedFrame {
        identifier,
        expiry,
        device_token,
        payload,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::protocol::payload::Payload;

    const TOKEN: &str = "fedfbcfbfebcfebcfebcfbcfebcfbcfebcfebcfebcfebcfebcfebcfebcfebcfe";

    fn hello_envelope() -> Envelope {
        let mut env = Envelope::new(1, 1356048000, TOKEN);
        env.add_payload(Payload::with_alert("hello"));
        env
    }

    #[test]
    fn encodes_reference_frame() {
        let out = hello_envelope().to_bytes().unwrap();
        let json = br#"{"aps":{"alert":"hello"}}"#;

        assert_eq!(&out[..11], &[0x01, 0, 0, 0, 1, 0x50, 0xD3, 0xA6, 0x80, 0x00, 0x20]);
        assert_eq!(&out[11..43], hex::decode(TOKEN).unwrap().as_slice());
        assert_eq!(&out[43..45], &(json.len() as u16).to_be_bytes());
        assert_eq!(&out[45..], json);
        assert_eq!(out.len(), FRAME_OVERHEAD_BYTES + 32 + json.len());
    }

    #[test]
    fn negative_identifier_keeps_bit_pattern() {
        let mut env = hello_envelope();
        env.identifier = -1;
        let out = env.to_bytes().unwrap();
        assert_eq!(&out[1..5], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(decode_frame(out).unwrap().identifier, -1);
    }

    #[test]
    fn empty_envelope_encodes_empty_object() {
        let out = Envelope::new(0, 0, "").to_bytes().unwrap();
        assert_eq!(out.as_ref(), &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, b'{', b'}']);
    }

    #[test]
    fn non_hex_token_fails_before_size_check() {
        let mut env = hello_envelope();
        env.device_token = "zz".into();
        env.set("big", "x".repeat(1000));
        let err = env.to_bytes().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDeviceToken);
    }

    #[test]
    fn odd_length_token_is_rejected() {
        let mut env = hello_envelope();
        env.device_token = "abc".into();
        assert_eq!(env.to_bytes().unwrap_err().code(), ErrorCode::InvalidDeviceToken);
    }

    #[test]
    fn payload_at_limit_is_accepted_and_one_over_is_not() {
        // {"k":"..."} wraps the string in 8 bytes.
        let mut env = Envelope::new(1, 0, TOKEN);
        env.set("k", "x".repeat(MAX_PAYLOAD_SIZE_BYTES - 8));
        assert_eq!(env.payload_json().unwrap().len(), MAX_PAYLOAD_SIZE_BYTES);
        assert!(env.to_bytes().is_ok());

        env.set("k", "x".repeat(MAX_PAYLOAD_SIZE_BYTES - 7));
        match env.to_bytes().unwrap_err() {
            ApnsError::PayloadTooLarge { size, limit } => {
                assert_eq!(size, MAX_PAYLOAD_SIZE_BYTES + 1);
                assert_eq!(limit, MAX_PAYLOAD_SIZE_BYTES);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn encoding_is_idempotent_and_tracks_mutation() {
        let mut env = hello_envelope();
        let a = env.to_bytes().unwrap();
        let b = env.to_bytes().unwrap();
        assert_eq!(a, b);

        env.set("extra", 1);
        let c = env.to_bytes().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn decode_inverts_encode() {
        let env = hello_envelope();
        let frame = decode_frame(env.to_bytes().unwrap()).unwrap();
        assert_eq!(frame.identifier, 1);
        assert_eq!(frame.expiry, 1356048000);
        assert_eq!(frame.device_token_hex(), TOKEN);
        assert_eq!(
            frame.payload_value().unwrap(),
            serde_json::json!({"aps": {"alert": "hello"}})
        );
    }

    #[test]
    fn decode_rejects_wrong_command() {
        let mut raw = hello_envelope().to_bytes().unwrap().to_vec();
        raw[0] = 2;
        let err = decode_frame(Bytes::from(raw)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedVersion);
    }

    #[test]
    fn decode_rejects_truncation_and_trailing_bytes() {
        let raw = hello_envelope().to_bytes().unwrap();

        for cut in [0, 5, 11, 30, 44, raw.len() - 1] {
            let err = decode_frame(raw.slice(..cut)).unwrap_err();
            assert_eq!(err.code(), ErrorCode::BadRequest, "cut={cut}");
        }

        let mut long = raw.to_vec();
        long.push(0);
        let err = decode_frame(Bytes::from(long)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[test]
    fn oversized_token_is_rejected() {
        // One byte past what the u16 length slot can carry.
        let env = Envelope::new(0, 0, "ab".repeat(usize::from(u16::MAX) + 1));
        let err = env.to_bytes().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDeviceToken);
    }

    #[test]
    fn token_at_u16_max_is_accepted() {
        let env = Envelope::new(0, 0, "ab".repeat(usize::from(u16::MAX)));
        let out = env.to_bytes().unwrap();
        assert_eq!(&out[9..11], &[0xFF, 0xFF]);
    }

    #[test]
    fn decode_rejects_payload_length_over_limit() {
        let mut raw = BytesMut::new();
        raw.put_u8(PUSH_COMMAND_VALUE);
        raw.put_u32(1);
        raw.put_u32(0);
        raw.put_u16(0);
        raw.put_u16(0x0101);
        raw.put_slice(&[b'x'; 257]);

        match decode_frame(raw.freeze()).unwrap_err() {
            ApnsError::PayloadTooLarge { size, limit } => {
                assert_eq!(size, 257);
                assert_eq!(limit, MAX_PAYLOAD_SIZE_BYTES);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
