//! Outgoing subscription frames.
//!
//! The spot stream takes `{"sub": "<kind>", ...}` requests and has no
//! unsubscribe; the futures streams take `{"req": "sub_<topic>", ...}`
//! with matching `unsub_<topic>` requests.

use serde_json::json;

/// Spot stream subscriptions.
#[derive(Debug, Clone)]
pub enum SpotTopic {
    /// Depth, deals, and stats for one symbol.
    Symbol { symbol: String },
    /// Candlesticks for one symbol at one interval.
    Kline { symbol: String, interval: String },
    /// Rolling statistics for every symbol.
    Stats,
    /// The user stream; `token` comes from
    /// [`SpotApi::ws_token`](crate::spot::SpotApi::ws_token).
    User { token: String },
}

impl SpotTopic {
    /// The subscription frame to send.
    pub fn request(&self) -> String {
        match self {
            Self::Symbol { symbol } => json!({"sub": "subSymbol", "symbol": symbol}),
            Self::Kline { symbol, interval } => {
                json!({"sub": "subKline", "symbol": symbol, "type": interval})
            }
            Self::Stats => json!({"sub": "subStats"}),
            Self::User { token } => json!({"sub": "subUser", "token": token}),
        }
        .to_string()
    }
}

/// Futures stream subscriptions.
#[derive(Debug, Clone)]
pub enum FuturesTopic {
    /// Depth and deals for one contract.
    Symbol { symbol: String },
    /// Candlesticks for one contract at one interval.
    Kline { symbol: String, interval: String },
    /// Ticker for one contract.
    Ticker { symbol: String },
    /// Mark price for one contract.
    MarkPrice { symbol: String },
    /// The user stream; `listen_key` comes from
    /// [`FuturesApi::listen_key`](crate::futures_api::FuturesApi::listen_key).
    User { listen_key: String },
}

impl FuturesTopic {
    fn name(&self) -> &'static str {
        match self {
            Self::Symbol { .. } => "symbol",
            Self::Kline { .. } => "kline",
            Self::Ticker { .. } => "ticker",
            Self::MarkPrice { .. } => "mark_price",
            Self::User { .. } => "user",
        }
    }

    fn fill(&self, frame: &mut serde_json::Map<String, serde_json::Value>) {
        match self {
            Self::Symbol { symbol } | Self::Ticker { symbol } | Self::MarkPrice { symbol } => {
                frame.insert("symbol".to_string(), json!(symbol));
            }
            Self::Kline { symbol, interval } => {
                frame.insert("symbol".to_string(), json!(symbol));
                frame.insert("type".to_string(), json!(interval));
            }
            Self::User { listen_key } => {
                frame.insert("listenKey".to_string(), json!(listen_key));
            }
        }
    }

    /// The subscription frame to send.
    pub fn subscribe(&self) -> String {
        self.frame("sub")
    }

    /// The matching unsubscribe frame.
    pub fn unsubscribe(&self) -> String {
        self.frame("unsub")
    }

    fn frame(&self, verb: &str) -> String {
        let mut frame = serde_json::Map::new();
        frame.insert(
            "req".to_string(),
            json!(format!("{verb}_{}", self.name())),
        );
        self.fill(&mut frame);
        serde_json::Value::Object(frame).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_json(frame: &str) -> serde_json::Value {
        serde_json::from_str(frame).unwrap()
    }

    #[test]
    fn spot_symbol_subscription() {
        let frame = as_json(
            &SpotTopic::Symbol {
                symbol: "BTC_USDT".to_string(),
            }
            .request(),
        );
        assert_eq!(frame["sub"], "subSymbol");
        assert_eq!(frame["symbol"], "BTC_USDT");
    }

    #[test]
    fn spot_kline_subscription_uses_type_field() {
        let frame = as_json(
            &SpotTopic::Kline {
                symbol: "BTC_USDT".to_string(),
                interval: "1m".to_string(),
            }
            .request(),
        );
        assert_eq!(frame["sub"], "subKline");
        assert_eq!(frame["type"], "1m");
    }

    #[test]
    fn spot_stats_subscription_has_no_symbol() {
        let frame = as_json(&SpotTopic::Stats.request());
        assert_eq!(frame["sub"], "subStats");
        assert!(frame.get("symbol").is_none());
    }

    #[test]
    fn spot_user_subscription_carries_token() {
        let frame = as_json(
            &SpotTopic::User {
                token: "tok-1".to_string(),
            }
            .request(),
        );
        assert_eq!(frame["sub"], "subUser");
        assert_eq!(frame["token"], "tok-1");
    }

    #[test]
    fn futures_subscribe_and_unsubscribe_pair() {
        let topic = FuturesTopic::Kline {
            symbol: "eth_usdt".to_string(),
            interval: "15m".to_string(),
        };
        let sub = as_json(&topic.subscribe());
        assert_eq!(sub["req"], "sub_kline");
        assert_eq!(sub["symbol"], "eth_usdt");
        assert_eq!(sub["type"], "15m");

        let unsub = as_json(&topic.unsubscribe());
        assert_eq!(unsub["req"], "unsub_kline");
        assert_eq!(unsub["symbol"], "eth_usdt");
    }

    #[test]
    fn futures_user_subscription_carries_listen_key() {
        let frame = as_json(
            &FuturesTopic::User {
                listen_key: "lk-9".to_string(),
            }
            .subscribe(),
        );
        assert_eq!(frame["req"], "sub_user");
        assert_eq!(frame["listenKey"], "lk-9");
    }

    #[test]
    fn futures_mark_price_topic_name() {
        let frame = as_json(
            &FuturesTopic::MarkPrice {
                symbol: "btc_usdt".to_string(),
            }
            .subscribe(),
        );
        assert_eq!(frame["req"], "sub_mark_price");
    }
}
