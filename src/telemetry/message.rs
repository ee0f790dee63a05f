use serde::{Deserialize, Serialize};

/// A single synthetic sensor reading, ready to publish.
///
/// The struct serializes to compact JSON with exactly five keys in
/// declaration order. Every field is filled in before serialization; a
/// message is constructed once, serialized, and never mutated afterward.
///
/// # Fields
///
/// - `device_id` - Identifier of the (simulated) device, `deviceId` on the wire.
/// - `timestamp` - ISO-8601 datetime with UTC offset, captured at construction time.
/// - `temperature_c` - Temperature reading in degrees Celsius, `temperatureC` on the wire.
/// - `humidity_pct` - Relative humidity in percent, `humidityPct` on the wire.
/// - `battery_mv` - Battery voltage in millivolts, `batteryMv` on the wire.
///
/// # Example
///
/// ```
/// use iotsim::telemetry::TelemetryMessage;
///
/// let msg = TelemetryMessage {
///     device_id: "sensor-001".to_string(),
///     timestamp: "2025-01-01T00:00:00.000000+00:00".to_string(),
///     temperature_c: 21.5,
///     humidity_pct: 55.0,
///     battery_mv: 3700,
/// };
/// assert!(msg.to_json().unwrap().starts_with("{\"deviceId\":\"sensor-001\""));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryMessage {
    pub device_id: String,
    pub timestamp: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub battery_mv: i64,
}

impl TelemetryMessage {
    /// Serializes the message to a minified JSON string.
    ///
    /// Key order follows field declaration order, so re-serializing a parsed
    /// message reproduces the original string byte for byte.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
