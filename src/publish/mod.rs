//! The `publish` module is responsible for handing a built payload to the
//! message broker.
//!
//! It defines the wire frame sent to the broker, the `Publish` seam the
//! entry point depends on, and the WebSocket client implementation of it.

pub mod frame;
pub mod websocket;

pub use frame::PublishFrame;
pub use websocket::WsPublisher;

use std::future::Future;

use crate::utils::error::SimError;

/// The single operation the broker collaborator exposes.
///
/// Implementations send `payload` to `topic` with the given QoS level and
/// return once the frame has been handed to the transport. The broker's
/// response, if any, is not inspected.
pub trait Publish {
    fn publish(
        &mut self,
        topic: &str,
        qos: u8,
        payload: &str,
    ) -> impl Future<Output = Result<(), SimError>>;
}
