//! Public spot market data endpoints.

use hashex_core::types::Depth;

use crate::error::ClientError;
use crate::http::Params;

use super::SpotApi;

/// Depth levels accepted by the exchange.
const DEPTH_LEVEL_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

impl SpotApi<'_> {
    /// Current server time in milliseconds.
    pub async fn server_time(&self) -> Result<i64, ClientError> {
        self.client()
            .get_data("/spot/v1/p/time", &Params::new(), false)
            .await
    }

    /// Trading rules for one symbol, or for every symbol when `symbol`
    /// is `None`.
    pub async fn symbol_configs(
        &self,
        symbol: Option<&str>,
    ) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), symbol.to_string());
        }
        self.client()
            .get_data("/spot/v1/p/symbol/configs", &params, false)
            .await
    }

    /// Order book snapshot. `level` is the number of price levels per
    /// side and must be within 1..=50.
    pub async fn depth(&self, symbol: &str, level: u32) -> Result<Depth, ClientError> {
        if symbol.is_empty() {
            return Err(ClientError::InvalidRequest(
                "symbol must not be empty".to_string(),
            ));
        }
        if !DEPTH_LEVEL_RANGE.contains(&level) {
            return Err(ClientError::InvalidRequest(format!(
                "depth level must be between 1 and 50, got {level}"
            )));
        }

        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("level".to_string(), level.to_string());
        self.client()
            .get_data("/spot/v1/p/quotation/depth", &params, false)
            .await
    }

    /// 24h rolling ticker for one symbol.
    pub async fn ticker(&self, symbol: &str) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        self.client()
            .get_data("/spot/v1/p/quotation/trend/ticker", &params, false)
            .await
    }

    /// Tickers for every listed symbol.
    pub async fn tickers(&self) -> Result<serde_json::Value, ClientError> {
        self.client()
            .get_data("/spot/v1/p/quotation/tickers", &Params::new(), false)
            .await
    }

    /// Candlesticks. `interval` uses the exchange's notation
    /// (`1m`, `5m`, `1h`, `1d`, ...); the time range and limit are
    /// optional.
    pub async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("interval".to_string(), interval.to_string());
        if let Some(limit) = limit {
            params.insert("limit".to_string(), limit.to_string());
        }
        if let Some(start_time) = start_time {
            params.insert("startTime".to_string(), start_time.to_string());
        }
        if let Some(end_time) = end_time {
            params.insert("endTime".to_string(), end_time.to_string());
        }
        self.client()
            .get_data("/spot/v1/p/quotation/kline", &params, false)
            .await
    }

    /// Most recent trades; `num` is the number of entries to return.
    pub async fn deals(&self, symbol: &str, num: u32) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("num".to_string(), num.to_string());
        self.client()
            .get_data("/spot/v1/p/quotation/deal", &params, false)
            .await
    }
}
