use std::collections::BTreeMap;

use serde::Deserialize;

use apns_core::error::{ApnsError, Result};
use apns_core::protocol::APS_KEY;
use apns_core::{Envelope, Payload};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationDoc {
    pub version: u32,

    #[serde(default)]
    pub identifier: i32,

    #[serde(default)]
    pub expiry: u32,

    pub device_token: String,

    #[serde(default)]
    pub aps: Option<Payload>,

    /// Extra top-level payload keys, written next to `aps`.
    #[serde(default)]
    pub custom: BTreeMap<String, serde_yaml::Value>,
}

impl NotificationDoc {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ApnsError::UnsupportedVersion);
        }
        if self.device_token.trim().is_empty() {
            return Err(ApnsError::BadRequest("device_token must not be empty".into()));
        }
        if self.custom.contains_key(APS_KEY) {
            return Err(ApnsError::BadRequest(
                "custom.aps is reserved; use the top-level aps section".into(),
            ));
        }
        Ok(())
    }

    /// Build the envelope. Custom values go through JSON conversion, so YAML
    /// that has no JSON form (a sequence or mapping used as a key) fails here.
    pub fn to_envelope(&self) -> Result<Envelope> {
        let mut env = Envelope::new(self.identifier, self.expiry, self.device_token.trim());
        if let Some(aps) = &self.aps {
            env.add_payload(aps.clone());
        }
        for (key, value) in &self.custom {
            env.set_serialized(key.clone(), value)?;
        }
        Ok(env)
    }
}
