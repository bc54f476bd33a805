//! APNs tooling library entry.
//!
//! Loads notification documents (strict YAML) and turns them into envelopes
//! ready for the core frame encoder. Consumed by the `apns-frame` binary and
//! by integration tests.

pub mod config;
pub mod inspect;
