//! The `telemetry` module builds the message this service exists to send.
//!
//! It defines the `TelemetryMessage` record, the optional `Readings` a
//! caller may supply, and the generation step that fills every omitted
//! field before serialization.

pub mod builder;
pub mod message;

pub use builder::{Readings, build_message, generate};
pub use message::TelemetryMessage;
