//! WebSocket streaming: market data and user-data streams.
//!
//! Three streams exist. The spot stream (`/spot/v1/ws/socket`) carries
//! both market data and, after a token subscription, user data. The
//! futures side splits them: `/fut/v1/ws/market` for quotes and
//! `/fut/v1/ws/user` for account updates keyed by a listen key.
//!
//! The protocol is text frames throughout: the client sends JSON
//! subscription requests and a literal `"ping"` every
//! [`HEARTBEAT_INTERVAL`](client::HEARTBEAT_INTERVAL); the server
//! answers `"pong"` and pushes JSON messages that
//! [`messages`] parses into typed enums.

pub mod client;
pub mod messages;
pub mod reconnect;
pub mod subscribe;

pub use client::{WsClient, WsConnection};
pub use messages::{parse_futures_message, parse_spot_message, FuturesStreamMessage, SpotStreamMessage};
pub use reconnect::{reconnect_loop, Backoff, ReconnectConfig};
pub use subscribe::{FuturesTopic, SpotTopic};
