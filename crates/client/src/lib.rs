//! REST and WebSocket client for the HashEx exchange OpenAPI.
//!
//! [`ApiClient`] is the signed HTTP transport; [`spot::SpotApi`] and
//! [`futures_api::FuturesApi`] wrap it with typed endpoint methods. The
//! [`ws`] module covers the streaming side: subscription frames, typed
//! incoming messages, heartbeats, and reconnection.
//!
//! ```no_run
//! use hashex_client::{ApiClient, ApiConfig};
//!
//! # async fn run() -> Result<(), hashex_client::ClientError> {
//! let client = ApiClient::new(ApiConfig::public("https://open.hashex.vip"))?;
//! let depth = client.spot().depth("BTC_USDT", 10).await?;
//! println!("best bid: {:?}", depth.b.first());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod futures_api;
pub mod http;
pub mod spot;
pub mod ws;

pub use config::{ApiConfig, Credentials};
pub use error::ClientError;
pub use http::ApiClient;
