//! Futures order placement, queries, and take-profit/stop-loss
//! entrusts.

use hashex_core::types::{OrderSide, OrderType, PositionSide};

use crate::error::ClientError;
use crate::http::Params;

use super::FuturesApi;

/// A futures order to be placed.
#[derive(Debug, Clone)]
pub struct FuturesOrderRequest {
    pub symbol: String,
    pub order_side: OrderSide,
    pub order_type: OrderType,
    /// Contract quantity as a decimal string.
    pub orig_qty: String,
    pub position_side: PositionSide,
    /// Limit price; required for limit orders.
    pub price: Option<String>,
    pub time_in_force: Option<String>,
    pub client_order_id: Option<String>,
    pub reduce_only: Option<bool>,
    /// Position to reduce, for reduce-only orders.
    pub position_id: Option<i64>,
    pub trigger_profit_price: Option<String>,
    pub trigger_stop_price: Option<String>,
    pub leverage: Option<u32>,
    /// Price protection level for market orders.
    pub market_order_level: Option<i32>,
    pub source_type: Option<i32>,
    pub copy_trade: Option<bool>,
}

impl FuturesOrderRequest {
    /// A plain limit order; optional fields start unset.
    pub fn limit(
        symbol: impl Into<String>,
        order_side: OrderSide,
        position_side: PositionSide,
        orig_qty: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_side,
            order_type: OrderType::Limit,
            orig_qty: orig_qty.into(),
            position_side,
            price: Some(price.into()),
            time_in_force: None,
            client_order_id: None,
            reduce_only: None,
            position_id: None,
            trigger_profit_price: None,
            trigger_stop_price: None,
            leverage: None,
            market_order_level: None,
            source_type: None,
            copy_trade: None,
        }
    }

    /// A plain market order; optional fields start unset.
    pub fn market(
        symbol: impl Into<String>,
        order_side: OrderSide,
        position_side: PositionSide,
        orig_qty: impl Into<String>,
    ) -> Self {
        Self {
            price: None,
            order_type: OrderType::Market,
            ..Self::limit(symbol, order_side, position_side, orig_qty, String::new())
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.symbol.is_empty() {
            return Err(ClientError::InvalidRequest(
                "symbol must not be empty".to_string(),
            ));
        }
        if self.orig_qty.is_empty() {
            return Err(ClientError::InvalidRequest(
                "origQty must not be empty".to_string(),
            ));
        }
        if self.order_type == OrderType::Limit
            && self.price.as_deref().unwrap_or_default().is_empty()
        {
            return Err(ClientError::InvalidRequest(
                "limit orders require a price".to_string(),
            ));
        }
        Ok(())
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("symbol".to_string(), self.symbol.clone());
        params.insert("orderSide".to_string(), self.order_side.as_str().to_string());
        params.insert("orderType".to_string(), self.order_type.as_str().to_string());
        params.insert("origQty".to_string(), self.orig_qty.clone());
        params.insert(
            "positionSide".to_string(),
            self.position_side.as_str().to_string(),
        );
        if let Some(price) = &self.price {
            params.insert("price".to_string(), price.clone());
        }
        if let Some(tif) = &self.time_in_force {
            params.insert("timeInForce".to_string(), tif.clone());
        }
        if let Some(id) = &self.client_order_id {
            params.insert("clientOrderId".to_string(), id.clone());
        }
        if let Some(reduce_only) = self.reduce_only {
            params.insert("reduceOnly".to_string(), reduce_only.to_string());
        }
        if let Some(id) = self.position_id {
            params.insert("positionId".to_string(), id.to_string());
        }
        if let Some(price) = &self.trigger_profit_price {
            params.insert("triggerProfitPrice".to_string(), price.clone());
        }
        if let Some(price) = &self.trigger_stop_price {
            params.insert("triggerStopPrice".to_string(), price.clone());
        }
        if let Some(leverage) = self.leverage {
            params.insert("leverage".to_string(), leverage.to_string());
        }
        if let Some(level) = self.market_order_level {
            params.insert("marketOrderLevel".to_string(), level.to_string());
        }
        if let Some(source_type) = self.source_type {
            params.insert("sourceType".to_string(), source_type.to_string());
        }
        if let Some(copy_trade) = self.copy_trade {
            params.insert("copyTrade".to_string(), copy_trade.to_string());
        }
        params
    }
}

/// Filters for [`FuturesApi::order_list`] and
/// [`FuturesApi::order_list_history`].
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub symbol: Option<String>,
    pub state: Option<String>,
    pub order_side: Option<OrderSide>,
    pub order_type: Option<OrderType>,
    pub contract_type: Option<String>,
    pub client_order_id: Option<String>,
    pub force_close: Option<bool>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl OrderListQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(symbol) = &self.symbol {
            params.insert("symbol".to_string(), symbol.clone());
        }
        if let Some(state) = &self.state {
            params.insert("state".to_string(), state.clone());
        }
        if let Some(side) = self.order_side {
            params.insert("orderSide".to_string(), side.as_str().to_string());
        }
        if let Some(order_type) = self.order_type {
            params.insert("orderType".to_string(), order_type.as_str().to_string());
        }
        if let Some(contract_type) = &self.contract_type {
            params.insert("contractType".to_string(), contract_type.clone());
        }
        if let Some(id) = &self.client_order_id {
            params.insert("clientOrderId".to_string(), id.clone());
        }
        if let Some(force_close) = self.force_close {
            params.insert("forceClose".to_string(), force_close.to_string());
        }
        if let Some(start_time) = self.start_time {
            params.insert("startTime".to_string(), start_time.to_string());
        }
        if let Some(end_time) = self.end_time {
            params.insert("endTime".to_string(), end_time.to_string());
        }
        if let Some(page) = self.page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(size) = self.size {
            params.insert("size".to_string(), size.to_string());
        }
        params
    }
}

/// A take-profit/stop-loss entrust attached to a position.
#[derive(Debug, Clone, Default)]
pub struct ProfitEntrustRequest {
    pub symbol: String,
    pub trigger_profit_price: Option<String>,
    pub trigger_stop_price: Option<String>,
    /// Which price feed fires the trigger (mark/index/latest).
    pub trigger_price_type: Option<String>,
    pub position_id: Option<i64>,
    pub orig_qty: Option<String>,
    /// Expiry timestamp in milliseconds.
    pub expire_time: Option<i64>,
}

impl ProfitEntrustRequest {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("symbol".to_string(), self.symbol.clone());
        if let Some(price) = &self.trigger_profit_price {
            params.insert("triggerProfitPrice".to_string(), price.clone());
        }
        if let Some(price) = &self.trigger_stop_price {
            params.insert("triggerStopPrice".to_string(), price.clone());
        }
        if let Some(kind) = &self.trigger_price_type {
            params.insert("triggerPriceType".to_string(), kind.clone());
        }
        if let Some(id) = self.position_id {
            params.insert("positionId".to_string(), id.to_string());
        }
        if let Some(qty) = &self.orig_qty {
            params.insert("origQty".to_string(), qty.clone());
        }
        if let Some(expire) = self.expire_time {
            params.insert("expireTime".to_string(), expire.to_string());
        }
        params
    }
}

impl FuturesApi<'_> {
    /// Place a futures order. Returns the exchange-assigned order id.
    pub async fn create_order(&self, order: &FuturesOrderRequest) -> Result<String, ClientError> {
        order.validate()?;
        self.client()
            .post_data("/fut/v1/order/create", &order.to_params())
            .await
    }

    /// Cancel one order.
    pub async fn cancel_order(&self, order_id: i64) -> Result<(), ClientError> {
        let mut params = Params::new();
        params.insert("orderId".to_string(), order_id.to_string());
        self.client().post_ok("/fut/v1/order/cancel", &params).await
    }

    /// Cancel several orders; ids travel as a JSON array string.
    pub async fn cancel_orders_batch(&self, order_ids: &[i64]) -> Result<(), ClientError> {
        if order_ids.is_empty() {
            return Err(ClientError::InvalidRequest(
                "batch cancel requires at least one order id".to_string(),
            ));
        }
        let mut params = Params::new();
        params.insert("orderIds".to_string(), serde_json::to_string(order_ids)?);
        self.client()
            .post_ok("/fut/v1/order/cancel-batch", &params)
            .await
    }

    /// Fetch one order.
    pub async fn order_detail(&self, order_id: i64) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("orderId".to_string(), order_id.to_string());
        self.client()
            .get_data("/fut/v1/order/detail", &params, true)
            .await
    }

    /// Current orders matching the query.
    pub async fn order_list(
        &self,
        query: &OrderListQuery,
    ) -> Result<serde_json::Value, ClientError> {
        self.client()
            .get_data("/fut/v1/order/list", &query.to_params(), true)
            .await
    }

    /// Historical orders matching the query.
    pub async fn order_list_history(
        &self,
        query: &OrderListQuery,
    ) -> Result<serde_json::Value, ClientError> {
        self.client()
            .get_data("/fut/v1/order/list-history", &query.to_params(), true)
            .await
    }

    /// Fills, optionally narrowed to one order or time range.
    pub async fn trade_list(
        &self,
        symbol: Option<&str>,
        order_id: Option<i64>,
        start_time: Option<i64>,
        end_time: Option<i64>,
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
        if let Some(start_time) = start_time {
            params.insert("startTime".to_string(), start_time.to_string());
        }
        if let Some(end_time) = end_time {
            params.insert("endTime".to_string(), end_time.to_string());
        }
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(size) = size {
            params.insert("size".to_string(), size.to_string());
        }
        self.client()
            .get_data("/fut/v1/order/trade-list", &params, true)
            .await
    }

    /// Attach a take-profit/stop-loss entrust to a position.
    pub async fn create_profit_entrust(
        &self,
        request: &ProfitEntrustRequest,
    ) -> Result<serde_json::Value, ClientError> {
        if request.symbol.is_empty() {
            return Err(ClientError::InvalidRequest(
                "symbol must not be empty".to_string(),
            ));
        }
        if request.trigger_profit_price.is_none() && request.trigger_stop_price.is_none() {
            return Err(ClientError::InvalidRequest(
                "a trigger profit or stop price is required".to_string(),
            ));
        }
        self.client()
            .post_data("/fut/v1/entrust/create-profit", &request.to_params())
            .await
    }

    /// Active take-profit/stop-loss entrusts.
    pub async fn profit_entrusts(
        &self,
        symbol: Option<&str>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), symbol.to_string());
        }
        if let Some(page) = page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(size) = size {
            params.insert("size".to_string(), size.to_string());
        }
        self.client()
            .get_data("/fut/v1/entrust/profit-list", &params, true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_order_params() {
        let order = FuturesOrderRequest::limit(
            "eth_usdt",
            OrderSide::Buy,
            PositionSide::Long,
            "10",
            "3000.5",
        );
        assert!(order.validate().is_ok());
        let params = order.to_params();
        assert_eq!(params["symbol"], "eth_usdt");
        assert_eq!(params["orderSide"], "BUY");
        assert_eq!(params["orderType"], "LIMIT");
        assert_eq!(params["origQty"], "10");
        assert_eq!(params["positionSide"], "LONG");
        assert_eq!(params["price"], "3000.5");
        assert!(!params.contains_key("reduceOnly"));
    }

    #[test]
    fn market_order_omits_price() {
        let order =
            FuturesOrderRequest::market("btc_usdt", OrderSide::Sell, PositionSide::Short, "1");
        assert!(order.validate().is_ok());
        assert!(!order.to_params().contains_key("price"));
    }

    #[test]
    fn limit_order_without_price_is_invalid() {
        let mut order =
            FuturesOrderRequest::limit("btc_usdt", OrderSide::Buy, PositionSide::Long, "1", "1");
        order.price = None;
        assert!(matches!(
            order.validate(),
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[test]
    fn optional_fields_round_trip_into_params() {
        let mut order =
            FuturesOrderRequest::limit("eth_usdt", OrderSide::Buy, PositionSide::Long, "5", "3000");
        order.reduce_only = Some(true);
        order.leverage = Some(20);
        order.trigger_profit_price = Some("3500".to_string());
        let params = order.to_params();
        assert_eq!(params["reduceOnly"], "true");
        assert_eq!(params["leverage"], "20");
        assert_eq!(params["triggerProfitPrice"], "3500");
    }

    #[test]
    fn entrust_requires_a_trigger_price() {
        let request = ProfitEntrustRequest {
            symbol: "eth_usdt".to_string(),
            ..Default::default()
        };
        assert!(request.trigger_profit_price.is_none());
        let params = request.to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params["symbol"], "eth_usdt");
    }

    #[test]
    fn list_query_serializes_filters() {
        let query = OrderListQuery {
            symbol: Some("eth_usdt".to_string()),
            order_side: Some(OrderSide::Sell),
            page: Some(1),
            size: Some(10),
            ..Default::default()
        };
        let params = query.to_params();
        assert_eq!(params["symbol"], "eth_usdt");
        assert_eq!(params["orderSide"], "SELL");
        assert_eq!(params["page"], "1");
        assert_eq!(params["size"], "10");
        assert!(!params.contains_key("state"));
    }
}
