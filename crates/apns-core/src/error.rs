//! Shared error type across the APNs crates.

use thiserror::Error;

/// Stable error codes (safe to print, log, and match on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Device token is not well-formed hex.
    InvalidDeviceToken,
    /// A payload value could not be serialized to JSON.
    PayloadSerialization,
    /// Serialized payload exceeds the gateway limit.
    PayloadTooLarge,
    /// Malformed input (document or frame).
    BadRequest,
    /// Unsupported document version or frame command.
    UnsupportedVersion,
    /// Internal / I/O failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in CLI output and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidDeviceToken => "INVALID_DEVICE_TOKEN",
            ErrorCode::PayloadSerialization => "PAYLOAD_SERIALIZATION",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ApnsError>;

/// Unified error type used by core and tooling.
#[derive(Debug, Error)]
pub enum ApnsError {
    #[error("invalid device token: {0}")]
    InvalidDeviceToken(String),
    #[error("payload serialization failed: {0}")]
    PayloadSerialization(String),
    #[error("payload is {size} bytes, larger than the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ApnsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ApnsError::InvalidDeviceToken(_) => ErrorCode::InvalidDeviceToken,
            ApnsError::PayloadSerialization(_) => ErrorCode::PayloadSerialization,
            ApnsError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            ApnsError::BadRequest(_) => ErrorCode::BadRequest,
            ApnsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ApnsError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<hex::FromHexError> for ApnsError {
    fn from(e: hex::FromHexError) -> Self {
        ApnsError::InvalidDeviceToken(e.to_string())
    }
}

impl From<serde_json::Error> for ApnsError {
    fn from(e: serde_json::Error) -> Self {
        ApnsError::PayloadSerialization(e.to_string())
    }
}
