//! Notification document loader (strict parsing).

pub mod schema;

use std::fs;

use apns_core::error::{ApnsError, Result};

pub use schema::NotificationDoc;

pub fn load_from_file(path: &str) -> Result<NotificationDoc> {
    let s = fs::read_to_string(path)
        .map_err(|e| ApnsError::Internal(format!("read notification failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<NotificationDoc> {
    let doc: NotificationDoc = serde_yaml::from_str(s)
        .map_err(|e| ApnsError::BadRequest(format!("invalid yaml: {e}")))?;
    doc.validate()?;
    Ok(doc)
}
