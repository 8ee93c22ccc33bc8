//! WebSocket connection establishment and frame plumbing.
//!
//! [`WsClient`] holds the target URL and optional credentials; call
//! [`WsClient::connect`] to get a live [`WsConnection`]. The spot
//! stream authenticates on the handshake with the same signed headers
//! as REST (over an empty parameter map); the futures user stream
//! authenticates after connect via a listen-key subscription instead.

use std::collections::BTreeMap;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use hashex_core::auth::AuthHeaders;

use crate::config::Credentials;
use crate::error::ClientError;
use crate::ws::subscribe::{FuturesTopic, SpotTopic};

/// How often to send the application-level `"ping"` text frame.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(25);

const SPOT_STREAM_PATH: &str = "/spot/v1/ws/socket";
const FUTURES_MARKET_PATH: &str = "/fut/v1/ws/market";
const FUTURES_USER_PATH: &str = "/fut/v1/ws/user";

/// Configuration handle for one stream endpoint.
pub struct WsClient {
    url: String,
    credentials: Option<Credentials>,
}

impl WsClient {
    /// Public spot stream (market data only).
    ///
    /// * `ws_base_url` - WebSocket base URL, e.g. `wss://open.hashex.vip`.
    pub fn spot(ws_base_url: &str) -> Self {
        Self {
            url: format!("{ws_base_url}{SPOT_STREAM_PATH}"),
            credentials: None,
        }
    }

    /// Spot stream with signed handshake headers, as required before a
    /// user-data subscription.
    pub fn spot_with_credentials(ws_base_url: &str, credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            ..Self::spot(ws_base_url)
        }
    }

    /// Futures market data stream.
    pub fn futures_market(ws_base_url: &str) -> Self {
        Self {
            url: format!("{ws_base_url}{FUTURES_MARKET_PATH}"),
            credentials: None,
        }
    }

    /// Futures user data stream; authenticate after connecting by
    /// subscribing with a listen key.
    pub fn futures_user(ws_base_url: &str) -> Self {
        Self {
            url: format!("{ws_base_url}{FUTURES_USER_PATH}"),
            credentials: None,
        }
    }

    /// Full URL this client connects to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open the WebSocket connection.
    pub async fn connect(&self) -> Result<WsConnection, ClientError> {
        let mut request = self
            .url
            .as_str()
            .into_client_request()
            .map_err(|e| ClientError::WebSocket(format!("invalid stream URL {}: {e}", self.url)))?;

        if let Some(creds) = &self.credentials {
            // The handshake signature covers an empty parameter map.
            let headers = AuthHeaders::sign(&creds.access_key, &creds.secret_key, &BTreeMap::new());
            for (name, value) in headers.iter() {
                let value = value.parse().map_err(|_| {
                    ClientError::WebSocket(format!("invalid value for handshake header {name}"))
                })?;
                request.headers_mut().insert(name, value);
            }
        }

        let (stream, _response) = connect_async(request).await.map_err(|e| {
            ClientError::WebSocket(format!("failed to connect to {}: {e}", self.url))
        })?;

        tracing::info!(url = %self.url, "stream connected");
        Ok(WsConnection { stream })
    }
}

/// A live stream connection.
pub struct WsConnection {
    stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl WsConnection {
    /// Send a raw text frame.
    pub async fn send_text(&mut self, text: impl Into<String>) -> Result<(), ClientError> {
        self.stream
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| ClientError::WebSocket(format!("send failed: {e}")))
    }

    /// Send the application-level heartbeat. Schedule this every
    /// [`HEARTBEAT_INTERVAL`] or the server will drop the connection.
    pub async fn send_heartbeat(&mut self) -> Result<(), ClientError> {
        self.send_text("ping").await
    }

    /// Subscribe to a spot topic.
    pub async fn subscribe_spot(&mut self, topic: &SpotTopic) -> Result<(), ClientError> {
        let frame = topic.request();
        tracing::debug!(frame = %frame, "subscribing");
        self.send_text(frame).await
    }

    /// Subscribe to a futures topic.
    pub async fn subscribe_futures(&mut self, topic: &FuturesTopic) -> Result<(), ClientError> {
        let frame = topic.subscribe();
        tracing::debug!(frame = %frame, "subscribing");
        self.send_text(frame).await
    }

    /// Unsubscribe from a futures topic.
    pub async fn unsubscribe_futures(&mut self, topic: &FuturesTopic) -> Result<(), ClientError> {
        let frame = topic.unsubscribe();
        tracing::debug!(frame = %frame, "unsubscribing");
        self.send_text(frame).await
    }

    /// Next message text, skipping heartbeat replies and answering
    /// protocol pings. Returns `None` once the server closes.
    pub async fn next_text(&mut self) -> Result<Option<String>, ClientError> {
        while let Some(frame) = self.stream.next().await {
            let frame = frame.map_err(|e| ClientError::WebSocket(format!("read failed: {e}")))?;
            match frame {
                Message::Text(text) => {
                    if text == "pong" {
                        continue;
                    }
                    return Ok(Some(text));
                }
                Message::Ping(payload) => {
                    self.stream
                        .send(Message::Pong(payload))
                        .await
                        .map_err(|e| ClientError::WebSocket(format!("pong failed: {e}")))?;
                }
                Message::Close(_) => {
                    tracing::info!("stream closed by server");
                    return Ok(None);
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Close the connection gracefully.
    pub async fn close(mut self) -> Result<(), ClientError> {
        self.stream
            .close(None)
            .await
            .map_err(|e| ClientError::WebSocket(format!("close failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_url_targets_the_socket_path() {
        let client = WsClient::spot("wss://open.hashex.vip");
        assert_eq!(client.url(), "wss://open.hashex.vip/spot/v1/ws/socket");
    }

    #[test]
    fn futures_urls_split_market_and_user() {
        assert_eq!(
            WsClient::futures_market("wss://open.hashex.vip").url(),
            "wss://open.hashex.vip/fut/v1/ws/market"
        );
        assert_eq!(
            WsClient::futures_user("wss://open.hashex.vip").url(),
            "wss://open.hashex.vip/fut/v1/ws/user"
        );
    }

    #[tokio::test]
    async fn connect_to_unresolvable_host_fails_with_websocket_error() {
        let client = WsClient::spot("ws://127.0.0.1:1");
        match client.connect().await {
            Err(ClientError::WebSocket(msg)) => {
                assert!(msg.contains("failed to connect"));
            }
            other => panic!("Expected WebSocket error, got {:?}", other.map(|_| ())),
        }
    }
}
