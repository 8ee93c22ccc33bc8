//! Shared exchange data types.
//!
//! Enums carry the exact wire strings the exchange uses; numeric
//! amounts stay `String` end to end because the exchange quotes
//! arbitrary-precision decimals and expects them echoed back verbatim.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Order enums
// ---------------------------------------------------------------------------

/// Buy/sell direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Execution style of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Limit,
    Market,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
        }
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    New,
    PartiallyFilled,
    Filled,
    /// Canceled with some quantity already executed.
    PartiallyCanceled,
    Canceled,
    Rejected,
    Expired,
}

impl OrderState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::PartiallyFilled => "PARTIALLY_FILLED",
            Self::Filled => "FILLED",
            Self::PartiallyCanceled => "PARTIALLY_CANCELED",
            Self::Canceled => "CANCELED",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Whether the order can still trade.
    pub fn is_open(self) -> bool {
        matches!(self, Self::New | Self::PartiallyFilled)
    }
}

/// Side of a futures position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "LONG",
            Self::Short => "SHORT",
        }
    }
}

/// Account the order trades against. Sent on the wire as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceType {
    /// Spot account (`1`).
    Spot,
    /// Leveraged/margin account (`2`).
    Margin,
}

impl BalanceType {
    pub fn code(self) -> i32 {
        match self {
            Self::Spot => 1,
            Self::Margin => 2,
        }
    }
}

impl Default for BalanceType {
    fn default() -> Self {
        Self::Spot
    }
}

// ---------------------------------------------------------------------------
// Market data
// ---------------------------------------------------------------------------

/// Order book snapshot from the depth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depth {
    /// Symbol, e.g. `BTC_USDT`.
    pub s: String,
    /// Snapshot timestamp (milliseconds).
    pub t: i64,
    /// Book update id.
    #[serde(default)]
    pub u: Option<i64>,
    /// Bid levels as `[price, quantity]` string pairs, best first.
    pub b: Vec<Vec<String>>,
    /// Ask levels as `[price, quantity]` string pairs, best first.
    pub a: Vec<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// A spot order as returned by the detail/list/history endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub client_order_id: Option<String>,
    pub symbol: String,
    pub order_type: OrderType,
    pub order_side: OrderSide,
    /// `1` spot account, `2` leveraged account.
    pub balance_type: Option<i32>,
    pub time_in_force: Option<String>,
    /// Limit price; absent for market orders.
    pub price: Option<String>,
    /// Original quantity.
    pub orig_qty: Option<String>,
    pub avg_price: Option<String>,
    pub executed_qty: Option<String>,
    pub margin_frozen: Option<String>,
    pub state: OrderState,
    /// Creation timestamp (milliseconds).
    pub created_time: Option<i64>,
    pub source_id: Option<String>,
    /// Forced-liquidation flag; only set on liquidation orders.
    pub force_close: Option<String>,
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Cursor-style page wrapper used by the history endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPage<T> {
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Offset-style page wrapper used by the open-order list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub ps: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}
