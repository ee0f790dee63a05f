use chrono::{SecondsFormat, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::telemetry::message::TelemetryMessage;

/// Caller-supplied field values for one message.
///
/// Every field is optional; whatever is left as `None` is filled with a
/// generated value by [`generate`]. Supplied values are taken as-is — no
/// range or format checks are applied to any of them.
#[derive(Debug, Clone, Default)]
pub struct Readings {
    /// Identifier of the device. Generated as a UUID v4 when absent.
    pub device_id: Option<String>,
    /// Temperature in °C. Drawn from [15.0, 30.0] when absent.
    pub temperature_c: Option<f64>,
    /// Relative humidity in %. Drawn from [30.0, 70.0] when absent.
    pub humidity_pct: Option<f64>,
    /// Battery voltage in mV. Drawn from [3000, 4200] when absent.
    pub battery_mv: Option<i64>,
}

/// Builds a complete message from partial readings.
///
/// Omitted fields are filled from `rng`, the timestamp is captured from the
/// wall clock at the moment of the call. Generated temperature and humidity
/// are rounded to two decimals.
pub fn generate<R: Rng>(readings: Readings, rng: &mut R) -> TelemetryMessage {
    let device_id = readings
        .device_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let temperature_c = readings
        .temperature_c
        .unwrap_or_else(|| round2(rng.random_range(15.0..=30.0)));
    let humidity_pct = readings
        .humidity_pct
        .unwrap_or_else(|| round2(rng.random_range(30.0..=70.0)));
    let battery_mv = readings
        .battery_mv
        .unwrap_or_else(|| rng.random_range(3000..=4200));

    TelemetryMessage {
        device_id,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        temperature_c,
        humidity_pct,
        battery_mv,
    }
}

/// Builds a message with the process RNG and serializes it in one step.
///
/// This is the convenience entry point used outside of tests; tests call
/// [`generate`] with a seeded generator instead.
pub fn build_message(readings: Readings) -> serde_json::Result<String> {
    generate(readings, &mut rand::rng()).to_json()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
