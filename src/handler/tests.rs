use serde_json::{Value, json};

use super::handle;
use crate::config::Settings;
use crate::publish::Publish;
use crate::utils::error::SimError;

/// Records every publish call instead of talking to a broker.
#[derive(Default)]
struct RecordingPublisher {
    calls: Vec<(String, u8, String)>,
}

impl Publish for RecordingPublisher {
    async fn publish(&mut self, topic: &str, qos: u8, payload: &str) -> Result<(), SimError> {
        self.calls
            .push((topic.to_string(), qos, payload.to_string()));
        Ok(())
    }
}

/// Fails every publish call, as if the broker were unreachable.
struct FailingPublisher;

impl Publish for FailingPublisher {
    async fn publish(&mut self, _topic: &str, _qos: u8, _payload: &str) -> Result<(), SimError> {
        Err(SimError::Transport(tungstenite::Error::ConnectionClosed))
    }
}

#[tokio::test]
async fn test_handle_publishes_once_with_configured_topic_and_qos() {
    let settings = Settings::default();
    let mut publisher = RecordingPublisher::default();

    handle(json!({}), json!({}), &mut publisher, &settings.device)
        .await
        .unwrap();

    assert_eq!(publisher.calls.len(), 1);
    let (topic, qos, payload) = &publisher.calls[0];
    assert_eq!(topic, "iot/data");
    assert_eq!(*qos, 0);

    let parsed: Value = serde_json::from_str(payload).unwrap();
    assert_eq!(parsed["deviceId"], "sensor-001");
    assert_eq!(parsed.as_object().unwrap().len(), 5);
}

#[tokio::test]
async fn test_handle_returns_fixed_success_response() {
    let settings = Settings::default();
    let mut publisher = RecordingPublisher::default();

    let response = handle(json!({}), json!({}), &mut publisher, &settings.device)
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "\"Message published successfully\"");

    let serialized = serde_json::to_string(&response).unwrap();
    assert_eq!(
        serialized,
        "{\"statusCode\":200,\"body\":\"\\\"Message published successfully\\\"\"}"
    );
}

#[tokio::test]
async fn test_handle_ignores_event_and_context_contents() {
    let settings = Settings::default();
    let mut publisher = RecordingPublisher::default();

    let event = json!({ "detail": { "anything": [1, 2, 3] } });
    let context = json!("opaque");
    let response = handle(event, context, &mut publisher, &settings.device)
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(publisher.calls.len(), 1);
}

#[tokio::test]
async fn test_handle_propagates_publisher_errors() {
    let settings = Settings::default();
    let mut publisher = FailingPublisher;

    let result = handle(json!({}), json!({}), &mut publisher, &settings.device).await;

    assert!(matches!(result, Err(SimError::Transport(_))));
}
