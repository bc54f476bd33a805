//! Protocol modules (payload model + legacy binary framing).
//!
//! - `payload`: the `aps` body with omit-if-empty field rules.
//! - `envelope`: one outbound notification and its key/value payload bag.
//! - `frame`: the command-1 binary frame encoder and its inverse parser.
//!
//! Fixed protocol facts live here as constants; they are not configuration.

pub mod envelope;
pub mod frame;
pub mod payload;

/// First byte of every frame in the simple notification format.
pub const PUSH_COMMAND_VALUE: u8 = 1;

/// The serialized JSON payload cannot exceed this many bytes.
pub const MAX_PAYLOAD_SIZE_BYTES: usize = 256;

/// Reserved payload key for the gateway-recognized body.
pub const APS_KEY: &str = "aps";
