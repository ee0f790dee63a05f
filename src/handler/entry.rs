use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::DeviceSettings;
use crate::publish::Publish;
use crate::telemetry::{Readings, build_message};
use crate::utils::error::SimError;

/// Body text of the success response, JSON-encoded into `Response::body`.
pub const SUCCESS_BODY: &str = "Message published successfully";

/// What the entry point reports back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Runs one invocation: build a message for the configured device and
/// publish it.
///
/// `event` and `context` are accepted as defined by the invocation contract
/// but carry nothing this logic uses. The publish response is not inspected;
/// the success value is fixed. A publisher error aborts the invocation and
/// propagates to the caller — there is no retry and no partial-failure
/// signaling.
pub async fn handle<P: Publish>(
    _event: Value,
    _context: Value,
    publisher: &mut P,
    device: &DeviceSettings,
) -> Result<Response, SimError> {
    let readings = Readings {
        device_id: Some(device.id.clone()),
        ..Readings::default()
    };
    let message = build_message(readings)?;

    publisher
        .publish(&device.topic, device.qos, &message)
        .await?;
    info!("Published message for {} to {}", device.id, device.topic);

    Ok(Response {
        status_code: 200,
        body: serde_json::to_string(SUCCESS_BODY)?,
    })
}
