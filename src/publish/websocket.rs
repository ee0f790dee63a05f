use futures_util::SinkExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info};
use tungstenite::protocol::Message as WsMessage;

use crate::publish::Publish;
use crate::publish::frame::PublishFrame;
use crate::utils::error::SimError;

/// WebSocket-backed publish client.
///
/// Holds one connection to the broker and sends one text frame per publish.
/// No acknowledgment is awaited; with QoS 0 the frame is fire-and-forget.
pub struct WsPublisher {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsPublisher {
    /// Connects to the broker at `url` (e.g. `ws://127.0.0.1:8080`).
    pub async fn connect(url: &str) -> Result<Self, SimError> {
        let (stream, _response) = connect_async(url).await?;
        info!("Connected to broker at {}", url);
        Ok(Self { stream })
    }
}

impl Publish for WsPublisher {
    async fn publish(&mut self, topic: &str, qos: u8, payload: &str) -> Result<(), SimError> {
        let frame = PublishFrame::publish(topic, qos, payload);
        let text = serde_json::to_string(&frame)?;
        self.stream.send(WsMessage::text(text)).await?;
        debug!("Published {} bytes to {}", payload.len(), topic);
        Ok(())
    }
}
