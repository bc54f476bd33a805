//! APNs core: payload model, envelope, and the legacy binary frame codec.
//!
//! This crate defines the wire-level contract for the "simple notification"
//! format (command 1) and the error surface shared by the tooling crates. It
//! carries no transport or runtime dependencies: it turns a notification into
//! bytes and nothing more.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ApnsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ApnsError, Result};
pub use protocol::envelope::{Envelope, Value};
pub use protocol::frame::{decode_frame, encode_frame, DecodedFrame};
pub use protocol::payload::{Alert, AlertDictionary, Payload};
