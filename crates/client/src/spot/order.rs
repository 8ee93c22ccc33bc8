//! Spot order placement and queries.

use serde::Serialize;

use hashex_core::types::{BalanceType, Order, OrderSide, OrderType, Page, ScrollPage};

use crate::error::ClientError;
use crate::http::Params;

use super::SpotApi;

/// A spot order to be placed.
///
/// Serializes to the exact parameter names the exchange expects, both
/// for the single-order call (as query parameters) and for batch
/// placement (as JSON array elements).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub symbol: String,
    pub direction: OrderSide,
    pub trade_type: OrderType,
    /// Order quantity as a decimal string, quoted verbatim.
    pub total_amount: String,
    /// Limit price; required for limit orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(serialize_with = "serialize_balance_type")]
    pub balance_type: BalanceType,
}

fn serialize_balance_type<S: serde::Serializer>(
    value: &BalanceType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32(value.code())
}

impl OrderRequest {
    fn new(
        symbol: impl Into<String>,
        direction: OrderSide,
        trade_type: OrderType,
        total_amount: impl Into<String>,
        price: Option<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            direction,
            trade_type,
            total_amount: total_amount.into(),
            price,
            client_order_id: None,
            balance_type: BalanceType::default(),
        }
    }

    /// Limit buy of `amount` at `price`.
    pub fn limit_buy(
        symbol: impl Into<String>,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::new(
            symbol,
            OrderSide::Buy,
            OrderType::Limit,
            amount,
            Some(price.into()),
        )
    }

    /// Limit sell of `amount` at `price`.
    pub fn limit_sell(
        symbol: impl Into<String>,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::new(
            symbol,
            OrderSide::Sell,
            OrderType::Limit,
            amount,
            Some(price.into()),
        )
    }

    /// Market buy of `amount`.
    pub fn market_buy(symbol: impl Into<String>, amount: impl Into<String>) -> Self {
        Self::new(symbol, OrderSide::Buy, OrderType::Market, amount, None)
    }

    /// Market sell of `amount`.
    pub fn market_sell(symbol: impl Into<String>, amount: impl Into<String>) -> Self {
        Self::new(symbol, OrderSide::Sell, OrderType::Market, amount, None)
    }

    /// Attach a client-chosen order id for idempotent lookup.
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Trade against a non-default account.
    pub fn with_balance_type(mut self, balance_type: BalanceType) -> Self {
        self.balance_type = balance_type;
        self
    }

    /// Reject requests the exchange would bounce anyway.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.symbol.is_empty() {
            return Err(ClientError::InvalidRequest(
                "symbol must not be empty".to_string(),
            ));
        }
        if self.total_amount.is_empty() {
            return Err(ClientError::InvalidRequest(
                "totalAmount must not be empty".to_string(),
            ));
        }
        if self.trade_type == OrderType::Limit && self.price.is_none() {
            return Err(ClientError::InvalidRequest(
                "limit orders require a price".to_string(),
            ));
        }
        Ok(())
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("symbol".to_string(), self.symbol.clone());
        params.insert("direction".to_string(), self.direction.as_str().to_string());
        params.insert("totalAmount".to_string(), self.total_amount.clone());
        params.insert(
            "tradeType".to_string(),
            self.trade_type.as_str().to_string(),
        );
        if let Some(price) = &self.price {
            params.insert("price".to_string(), price.clone());
        }
        if let Some(id) = &self.client_order_id {
            params.insert("clientOrderId".to_string(), id.clone());
        }
        params.insert(
            "balanceType".to_string(),
            self.balance_type.code().to_string(),
        );
        params
    }
}

/// Cursor direction for the history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Next,
    Prev,
}

impl ScrollDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "NEXT",
            Self::Prev => "PREV",
        }
    }
}

/// Filters for [`SpotApi::order_history`].
#[derive(Debug, Clone, Default)]
pub struct OrderHistoryQuery {
    pub symbol: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub balance_type: Option<BalanceType>,
    /// Cursor: the `orderId` to scroll from, together with `direction`.
    pub from_id: Option<i64>,
    pub direction: Option<ScrollDirection>,
    pub limit: Option<u32>,
}

impl OrderHistoryQuery {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("symbol".to_string(), self.symbol.clone());
        if let Some(start_time) = self.start_time {
            params.insert("startTime".to_string(), start_time.to_string());
        }
        if let Some(end_time) = self.end_time {
            params.insert("endTime".to_string(), end_time.to_string());
        }
        if let Some(balance_type) = self.balance_type {
            params.insert("balanceType".to_string(), balance_type.code().to_string());
        }
        if let Some(id) = self.from_id {
            params.insert("id".to_string(), id.to_string());
        }
        if let Some(direction) = self.direction {
            params.insert("direction".to_string(), direction.as_str().to_string());
        }
        if let Some(limit) = self.limit {
            params.insert("limit".to_string(), limit.to_string());
        }
        params
    }
}

impl SpotApi<'_> {
    /// Place a single order. Returns the exchange-assigned order id.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<String, ClientError> {
        order.validate()?;
        self.client()
            .post_data("/spot/v1/u/trade/order/create", &order.to_params())
            .await
    }

    /// Place several orders in one call.
    ///
    /// The orders travel as a JSON array string under `ordersJsonStr`;
    /// the response `data` is an array of per-order results.
    pub async fn batch_create_orders(
        &self,
        orders: &[OrderRequest],
    ) -> Result<serde_json::Value, ClientError> {
        if orders.is_empty() {
            return Err(ClientError::InvalidRequest(
                "batch create requires at least one order".to_string(),
            ));
        }
        for order in orders {
            order.validate()?;
        }

        let mut params = Params::new();
        params.insert("ordersJsonStr".to_string(), serde_json::to_string(orders)?);
        self.client()
            .post_data("/spot/v1/u/trade/order/batch/create", &params)
            .await
    }

    /// Cancel one order by exchange order id.
    pub async fn cancel_order(&self, order_id: i64) -> Result<(), ClientError> {
        let mut params = Params::new();
        params.insert("orderId".to_string(), order_id.to_string());
        self.client()
            .post_ok("/spot/v1/u/trade/order/cancel", &params)
            .await
    }

    /// Cancel several orders; ids travel as a JSON array string.
    pub async fn batch_cancel_orders(&self, order_ids: &[i64]) -> Result<(), ClientError> {
        if order_ids.is_empty() {
            return Err(ClientError::InvalidRequest(
                "batch cancel requires at least one order id".to_string(),
            ));
        }
        let mut params = Params::new();
        params.insert(
            "orderIdsJson".to_string(),
            serde_json::to_string(order_ids)?,
        );
        self.client()
            .post_ok("/spot/v1/u/trade/order/batch/cancel", &params)
            .await
    }

    /// Fetch one order by exchange id or client id; at least one of the
    /// two must be given.
    pub async fn order_detail(
        &self,
        order_id: Option<i64>,
        client_order_id: Option<&str>,
    ) -> Result<Order, ClientError> {
        if order_id.is_none() && client_order_id.is_none() {
            return Err(ClientError::InvalidRequest(
                "orderId or clientOrderId is required".to_string(),
            ));
        }
        let mut params = Params::new();
        if let Some(id) = order_id {
            params.insert("orderId".to_string(), id.to_string());
        }
        if let Some(id) = client_order_id {
            params.insert("clientOrderId".to_string(), id.to_string());
        }
        self.client()
            .get_data("/spot/v1/u/trade/order/detail", &params, true)
            .await
    }

    /// Open/recent orders for a symbol, offset-paged.
    pub async fn order_list(
        &self,
        symbol: &str,
        state: Option<&str>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<Page<Order>, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        if let Some(state) = state {
            params.insert("state".to_string(), state.to_string());
        }
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(size) = size {
            params.insert("size".to_string(), size.to_string());
        }
        self.client()
            .get_data("/spot/v1/u/trade/order/list", &params, true)
            .await
    }

    /// Historical orders, cursor-paged.
    pub async fn order_history(
        &self,
        query: &OrderHistoryQuery,
    ) -> Result<ScrollPage<Order>, ClientError> {
        if query.symbol.is_empty() {
            return Err(ClientError::InvalidRequest(
                "symbol must not be empty".to_string(),
            ));
        }
        self.client()
            .get_data("/spot/v1/u/trade/order/history", &query.to_params(), true)
            .await
    }

    /// Fills for the account, optionally narrowed to one order.
    pub async fn order_deals(
        &self,
        symbol: Option<&str>,
        order_id: Option<i64>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), symbol.to_string());
        }
        if let Some(id) = order_id {
            params.insert("orderId".to_string(), id.to_string());
        }
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(size) = size {
            params.insert("size".to_string(), size.to_string());
        }
        self.client()
            .get_data("/spot/v1/u/trade/order/deal", &params, true)
            .await
    }
}
