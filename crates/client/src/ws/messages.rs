//! Typed incoming stream messages.
//!
//! Spot messages arrive as `{"resType": "<kind>", "data": {...}}`;
//! futures messages as `{"channel": "<kind>", "data": ...}` with
//! subscription acknowledgements carrying a `req` field instead. Both
//! deserialize into internally-tagged enums; an unknown tag is a parse
//! error the caller should log and skip.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Spot stream
// ---------------------------------------------------------------------------

/// All known spot stream message types.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "resType", content = "data")]
pub enum SpotStreamMessage {
    /// Incremental depth update (one price level).
    #[serde(rename = "qDepth")]
    DepthUpdate(DepthUpdate),

    /// Full depth snapshot.
    #[serde(rename = "qAllDepth")]
    DepthSnapshot(DepthSnapshot),

    /// Public trade.
    #[serde(rename = "qDeal")]
    Deal(Deal),

    /// 24h rolling statistics.
    #[serde(rename = "qStats")]
    Stats(Stats),

    /// Candlestick update.
    #[serde(rename = "qKLine")]
    Kline(Kline),

    /// Account balance change (user stream).
    #[serde(rename = "uBalance")]
    Balance(BalanceUpdate),

    /// Order state change (user stream).
    #[serde(rename = "uOrder")]
    Order(OrderUpdate),

    /// Fill notification (user stream).
    #[serde(rename = "uTrade")]
    Trade(TradeUpdate),

    /// Broadcast system notice.
    #[serde(rename = "znxMessage")]
    SystemNotice(SystemNotice),
}

/// Payload of `qDepth`: a single changed price level.
#[derive(Debug, Clone, Deserialize)]
pub struct DepthUpdate {
    /// Update identifier.
    pub id: Option<String>,
    /// Symbol.
    pub s: String,
    /// Price.
    pub p: String,
    /// Quantity now resting at the level.
    pub q: String,
    /// Side: `1` bid, `2` ask.
    pub m: i32,
    /// Timestamp (milliseconds).
    pub t: i64,
}

/// Payload of `qAllDepth`: a full book snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct DepthSnapshot {
    pub s: String,
    pub id: Option<String>,
    /// Ask levels as `[price, quantity]` pairs.
    #[serde(default)]
    pub a: Vec<Vec<String>>,
    /// Bid levels as `[price, quantity]` pairs.
    #[serde(default)]
    pub b: Vec<Vec<String>>,
}

/// Payload of `qDeal`: one public trade.
#[derive(Debug, Clone, Deserialize)]
pub struct Deal {
    pub s: String,
    /// Price.
    pub p: String,
    /// Amount.
    pub a: String,
    /// Taker side: `1` buy, `2` sell.
    pub m: i32,
    pub t: i64,
}

/// Payload of `qStats`: rolling 24h statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub s: String,
    pub o: String,
    pub c: String,
    pub h: String,
    pub l: String,
    /// Base volume.
    pub a: String,
    /// Quote volume.
    pub v: String,
    /// Change ratio over the window.
    pub r: String,
}

/// Payload of `qKLine`: one candlestick.
#[derive(Debug, Clone, Deserialize)]
pub struct Kline {
    pub s: String,
    pub o: String,
    pub c: String,
    pub h: String,
    pub l: String,
    pub a: String,
    pub v: String,
    /// Interval notation, e.g. `1m`.
    pub i: String,
    pub t: i64,
}

/// Payload of `uBalance`: a balance change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdate {
    pub coin: String,
    pub balance_type: i32,
    pub balance: String,
    pub freeze: String,
    pub available_balance: String,
    pub estimated_total_amount: Option<String>,
    pub estimated_cyn_amount: Option<String>,
}

/// Payload of `uOrder`: an order state change.
///
/// The stream uses numeric codes where REST uses strings: `orderType`
/// `1` limit / `2` market / `3` TP-SL, `direction` `1` buy / `2` sell,
/// `state` `1` new / `2` partially filled / `3` filled / `4` canceled /
/// `5` canceling.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub order_id: String,
    pub balance_type: i32,
    pub order_type: i32,
    pub symbol: String,
    pub price: Option<String>,
    pub direction: i32,
    pub orig_qty: String,
    pub avg_price: Option<String>,
    pub deal_qty: Option<String>,
    pub state: i32,
    pub create_time: i64,
}

/// Payload of `uTrade`: one fill on an own order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeUpdate {
    pub order_id: String,
    pub price: String,
    pub quantity: String,
    pub margin_unfrozen: Option<String>,
    pub timestamp: i64,
}

/// Payload of `znxMessage`: a system notice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemNotice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub agg_type: Option<String>,
    pub detail_type: Option<String>,
    pub created_time: i64,
}

/// Parse a spot stream text frame into a typed message.
///
/// The literal heartbeat reply `"pong"` is not a message; filter it
/// before calling this.
pub fn parse_spot_message(text: &str) -> Result<SpotStreamMessage, serde_json::Error> {
    serde_json::from_str(text)
}

// ---------------------------------------------------------------------------
// Futures streams
// ---------------------------------------------------------------------------

/// A frame from the futures market or user stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FuturesStreamMessage {
    /// A data push, tagged by `channel`.
    Push(FuturesPush),
    /// A subscription acknowledgement, tagged by `req`.
    Ack(FuturesAck),
}

/// Data pushes on the futures streams.
///
/// Payloads stay untyped; each channel has its own shape and callers
/// typically forward them wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "channel", content = "data")]
pub enum FuturesPush {
    #[serde(rename = "push.ticker")]
    Ticker(serde_json::Value),
    #[serde(rename = "push.agg.ticker")]
    AggTicker(serde_json::Value),
    #[serde(rename = "push.deal")]
    Deal(serde_json::Value),
    #[serde(rename = "push.deep")]
    Depth(serde_json::Value),
    #[serde(rename = "push.deep.full")]
    DepthFull(serde_json::Value),
    #[serde(rename = "push.kline")]
    Kline(serde_json::Value),
    #[serde(rename = "push.mark.price")]
    MarkPrice(serde_json::Value),
    #[serde(rename = "push.index.price")]
    IndexPrice(serde_json::Value),
    #[serde(rename = "user.balance")]
    Balance(serde_json::Value),
    #[serde(rename = "user.order")]
    Order(serde_json::Value),
    #[serde(rename = "user.position")]
    Position(serde_json::Value),
    #[serde(rename = "user.position.conf")]
    PositionConf(serde_json::Value),
    #[serde(rename = "user.trade")]
    Trade(serde_json::Value),
}

/// Acknowledgement of a `sub_*`/`unsub_*` request.
#[derive(Debug, Clone, Deserialize)]
pub struct FuturesAck {
    /// The request being acknowledged, e.g. `sub_kline`.
    pub req: String,
    /// Present on failures.
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Parse a futures stream text frame into a typed message.
pub fn parse_futures_message(text: &str) -> Result<FuturesStreamMessage, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_depth_update() {
        let json = r#"{"resType":"qDepth","data":{"id":"d-1","s":"BTC_USDT","p":"43000.5","q":"0.12","m":1,"t":1700000000000}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::DepthUpdate(data) => {
                assert_eq!(data.s, "BTC_USDT");
                assert_eq!(data.p, "43000.5");
                assert_eq!(data.m, 1);
            }
            other => panic!("Expected DepthUpdate, got {other:?}"),
        }
    }

    #[test]
    fn parse_depth_snapshot() {
        let json = r#"{"resType":"qAllDepth","data":{"s":"BTC_USDT","id":"d-2","a":[["43001","0.3"]],"b":[["43000","1.5"]]}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::DepthSnapshot(data) => {
                assert_eq!(data.a.len(), 1);
                assert_eq!(data.b[0], vec!["43000", "1.5"]);
            }
            other => panic!("Expected DepthSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn parse_deal() {
        let json = r#"{"resType":"qDeal","data":{"s":"ETH_USDT","p":"3000.1","a":"0.5","m":2,"t":1700000000000}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::Deal(data) => {
                assert_eq!(data.s, "ETH_USDT");
                assert_eq!(data.m, 2);
            }
            other => panic!("Expected Deal, got {other:?}"),
        }
    }

    #[test]
    fn parse_stats() {
        let json = r#"{"resType":"qStats","data":{"s":"BTC_USDT","o":"42000","c":"43000","h":"43500","l":"41800","a":"120.5","v":"5100000","r":"0.0238"}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::Stats(data) => {
                assert_eq!(data.o, "42000");
                assert_eq!(data.r, "0.0238");
            }
            other => panic!("Expected Stats, got {other:?}"),
        }
    }

    #[test]
    fn parse_kline() {
        let json = r#"{"resType":"qKLine","data":{"s":"BTC_USDT","o":"42000","c":"42100","h":"42200","l":"41900","a":"10","v":"420000","i":"1m","t":1700000000000}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::Kline(data) => {
                assert_eq!(data.i, "1m");
                assert_eq!(data.t, 1700000000000);
            }
            other => panic!("Expected Kline, got {other:?}"),
        }
    }

    #[test]
    fn parse_balance_update() {
        let json = r#"{"resType":"uBalance","data":{"coin":"USDT","balanceType":1,"balance":"1250.5","freeze":"50","availableBalance":"1200.5"}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::Balance(data) => {
                assert_eq!(data.coin, "USDT");
                assert_eq!(data.balance_type, 1);
                assert!(data.estimated_total_amount.is_none());
            }
            other => panic!("Expected Balance, got {other:?}"),
        }
    }

    #[test]
    fn parse_order_update_with_numeric_codes() {
        let json = r#"{"resType":"uOrder","data":{"orderId":"475533479170587712","balanceType":1,"orderType":1,"symbol":"ETH_USDT","price":"3000","direction":2,"origQty":"0.5","avgPrice":"3000","dealQty":"0.25","state":2,"createTime":1700000000000}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::Order(data) => {
                assert_eq!(data.order_id, "475533479170587712");
                assert_eq!(data.order_type, 1);
                assert_eq!(data.direction, 2);
                assert_eq!(data.state, 2);
            }
            other => panic!("Expected Order, got {other:?}"),
        }
    }

    #[test]
    fn parse_trade_update() {
        let json = r#"{"resType":"uTrade","data":{"orderId":"1","price":"3000","quantity":"0.1","marginUnfrozen":"0","timestamp":1700000000000}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::Trade(data) => {
                assert_eq!(data.quantity, "0.1");
            }
            other => panic!("Expected Trade, got {other:?}"),
        }
    }

    #[test]
    fn parse_system_notice() {
        let json = r#"{"resType":"znxMessage","data":{"id":7,"title":"Maintenance","content":"tonight","aggType":"SYSTEM","detailType":"NOTICE","createdTime":1700000000000}}"#;
        match parse_spot_message(json).unwrap() {
            SpotStreamMessage::SystemNotice(data) => {
                assert_eq!(data.id, 7);
                assert_eq!(data.title, "Maintenance");
            }
            other => panic!("Expected SystemNotice, got {other:?}"),
        }
    }

    #[test]
    fn unknown_res_type_is_an_error() {
        assert!(parse_spot_message(r#"{"resType":"qUnknown","data":{}}"#).is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_spot_message("pong").is_err());
    }

    #[test]
    fn parse_futures_push() {
        let json = r#"{"channel":"push.ticker","data":{"s":"btc_usdt","c":"43000"}}"#;
        match parse_futures_message(json).unwrap() {
            FuturesStreamMessage::Push(FuturesPush::Ticker(data)) => {
                assert_eq!(data["s"], "btc_usdt");
            }
            other => panic!("Expected Ticker push, got {other:?}"),
        }
    }

    #[test]
    fn parse_futures_user_position() {
        let json = r#"{"channel":"user.position","data":{"positionId":"9","symbol":"eth_usdt"}}"#;
        match parse_futures_message(json).unwrap() {
            FuturesStreamMessage::Push(FuturesPush::Position(data)) => {
                assert_eq!(data["symbol"], "eth_usdt");
            }
            other => panic!("Expected Position push, got {other:?}"),
        }
    }

    #[test]
    fn parse_futures_ack() {
        let json = r#"{"req":"sub_kline"}"#;
        match parse_futures_message(json).unwrap() {
            FuturesStreamMessage::Ack(ack) => {
                assert_eq!(ack.req, "sub_kline");
                assert!(ack.code.is_none());
            }
            other => panic!("Expected Ack, got {other:?}"),
        }
    }

    #[test]
    fn parse_futures_ack_failure() {
        let json = r#"{"req":"sub_user","code":401,"msg":"bad listenKey"}"#;
        match parse_futures_message(json).unwrap() {
            FuturesStreamMessage::Ack(ack) => {
                assert_eq!(ack.code, Some(401));
                assert_eq!(ack.msg.as_deref(), Some("bad listenKey"));
            }
            other => panic!("Expected Ack, got {other:?}"),
        }
    }

    #[test]
    fn unknown_futures_channel_is_an_error() {
        assert!(parse_futures_message(r#"{"channel":"push.unknown","data":{}}"#).is_err());
    }
}
