//! Top-level facade crate for the APNs frame encoder.
//!
//! Re-exports the core codec and the notification-document tooling so users can depend on a single crate.

pub mod core {
    pub use apns_core::*;
}

pub mod cli {
    pub use apns_cli::*;
}
