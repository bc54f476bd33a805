//! Gateway-recognized notification body.
//!
//! Every field follows omit-if-empty presence: a zero badge, an empty string,
//! or an empty list is left out of the JSON entirely. Writing them as `0`/`""`
//! would change the wire bytes and eat into the payload budget.

use serde::{Deserialize, Serialize};

fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// Body placed under the reserved `"aps"` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub badge: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound: String,
}

impl Payload {
    /// Payload with a plain-text alert.
    pub fn with_alert(text: impl Into<String>) -> Self {
        Self {
            alert: Some(Alert::Text(text.into())),
            ..Self::default()
        }
    }
}

/// Alert is either plain text or the structured dictionary form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alert {
    Text(String),
    Dictionary(AlertDictionary),
}

impl From<&str> for Alert {
    fn from(s: &str) -> Self {
        Alert::Text(s.to_owned())
    }
}

impl From<String> for Alert {
    fn from(s: String) -> Self {
        Alert::Text(s)
    }
}

impl From<AlertDictionary> for Alert {
    fn from(d: AlertDictionary) -> Self {
        Alert::Dictionary(d)
    }
}

/// Structured alert. Only worth using when localization or a launch image is
/// needed; a plain text alert is shorter on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertDictionary {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(
        rename = "action-loc-key",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub action_loc_key: String,
    #[serde(rename = "loc-key", default, skip_serializing_if = "String::is_empty")]
    pub loc_key: String,
    #[serde(rename = "loc-args", default, skip_serializing_if = "Vec::is_empty")]
    pub loc_args: Vec<String>,
    #[serde(
        rename = "launch-image",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub launch_image: String,
}
