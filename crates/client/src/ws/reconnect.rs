//! Reconnection with exponential backoff.
//!
//! Stream connections drop; callers should treat every connection as
//! temporary and run [`reconnect_loop`] whenever one ends, resubscribing
//! their topics on the fresh connection.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::ws::client::{WsClient, WsConnection};

/// Tunable parameters for the backoff strategy.
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Delay before the second attempt (the first is immediate).
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure.
    pub multiplier: f64,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
        }
    }
}

/// Backoff state across attempts.
#[derive(Debug)]
pub struct Backoff {
    config: ReconnectConfig,
    delay: Duration,
}

impl Backoff {
    pub fn new(config: ReconnectConfig) -> Self {
        let delay = config.initial_delay;
        Self { config, delay }
    }

    /// The delay to wait before the next attempt; grows by the
    /// configured multiplier, clamped to the maximum.
    pub fn next_delay(&mut self) -> Duration {
        let current = self.delay;
        let grown_ms = (current.as_millis() as f64 * self.config.multiplier) as u64;
        self.delay = Duration::from_millis(grown_ms).min(self.config.max_delay);
        current
    }

    /// Reset to the initial delay after a successful connection.
    pub fn reset(&mut self) {
        self.delay = self.config.initial_delay;
    }
}

/// Keep trying to connect until it works or `cancel` fires.
///
/// Returns `Some(connection)` on success, `None` when cancelled.
pub async fn reconnect_loop(
    client: &WsClient,
    config: &ReconnectConfig,
    cancel: &CancellationToken,
) -> Option<WsConnection> {
    let mut backoff = Backoff::new(config.clone());
    let mut attempt = 0u32;

    loop {
        attempt += 1;

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(url = client.url(), "reconnect cancelled");
                return None;
            }
            result = client.connect() => {
                match result {
                    Ok(conn) => {
                        tracing::info!(url = client.url(), attempt, "reconnected");
                        return Some(conn);
                    }
                    Err(e) => {
                        tracing::warn!(url = client.url(), attempt, error = %e, "reconnect attempt failed");
                    }
                }
            }
        }

        let delay = backoff.next_delay();
        tokio::select! {
            _ = cancel.cancelled() => return None,
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
