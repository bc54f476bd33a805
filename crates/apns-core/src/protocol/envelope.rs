//! Outbound notification envelope and its key/value payload bag.

use std::collections::BTreeMap;

use serde::Serialize;

use super::payload::Payload;
use super::APS_KEY;
use crate::error::Result;

/// A payload value: either the structured `aps` body or any JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Aps(Payload),
    Json(serde_json::Value),
}

impl Value {
    /// The structured body, if this value holds one.
    pub fn as_aps(&self) -> Option<&Payload> {
        match self {
            Value::Aps(p) => Some(p),
            Value::Json(_) => None,
        }
    }

    /// The JSON value, if this is not a structured body.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(v) => Some(v),
            Value::Aps(_) => None,
        }
    }
}

impl From<Payload> for Value {
    fn from(p: Payload) -> Self {
        Value::Aps(p)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

macro_rules! json_value_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Json(serde_json::Value::from(v))
                }
            }
        )*
    };
}

json_value_from!(&str, String, bool, i32, i64, u32, u64, f64, Vec<serde_json::Value>);

/// One notification request, prior to encoding.
///
/// The length fields of the frame are computed by the encoder and are not
/// stored here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    /// Correlation id echoed back by the gateway on error.
    pub identifier: i32,
    /// Unix timestamp after which the gateway may drop the notification.
    pub expiry: u32,
    /// Hex-encoded device token.
    pub device_token: String,

    payload: Option<BTreeMap<String, Value>>,
}

impl Envelope {
    pub fn new(identifier: i32, expiry: u32, device_token: impl Into<String>) -> Self {
        Self {
            identifier,
            expiry,
            device_token: device_token.into(),
            payload: None,
        }
    }

    /// Store the body under the reserved `"aps"` key, replacing any prior value.
    pub fn add_payload(&mut self, payload: Payload) {
        self.set(APS_KEY, payload);
    }

    /// Insert or replace a top-level payload key. Last write wins; nothing is merged.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.payload
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
    }

    /// Insert any serializable custom value.
    ///
    /// Fails with `PayloadSerialization` when `value` has no JSON form
    /// (e.g. a map with non-string keys). The envelope is untouched on failure.
    pub fn set_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<()> {
        let v = serde_json::to_value(value)?;
        self.set(key, v);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.as_ref().and_then(|m| m.get(key))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.payload.as_mut().and_then(|m| m.remove(key))
    }

    /// Whether any payload key has been written yet.
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Serialize the whole payload map. Keys come out in ascending order.
    pub fn payload_json(&self) -> Result<Vec<u8>> {
        match &self.payload {
            Some(map) => Ok(serde_json::to_vec(map)?),
            None => Ok(b"{}".to_vec()),
        }
    }
}
