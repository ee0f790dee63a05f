use serde::{Deserialize, Serialize};

/// Client-to-broker frame, tagged with a `type` field.
///
/// Only publishing is ever sent by this service; the enum mirrors the
/// broker's client-message protocol so the frame can grow alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PublishFrame {
    #[serde(rename = "publish")]
    Publish {
        topic: String,
        payload: String,
        qos: u8,
    },
}

impl PublishFrame {
    pub fn publish(topic: &str, qos: u8, payload: &str) -> Self {
        Self::Publish {
            topic: topic.to_string(),
            payload: payload.to_string(),
            qos,
        }
    }
}
