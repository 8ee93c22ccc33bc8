//! Public futures market data endpoints.

use hashex_core::types::Depth;

use crate::error::ClientError;
use crate::http::Params;

use super::FuturesApi;

impl FuturesApi<'_> {
    /// Current server time in milliseconds.
    pub async fn server_time(&self) -> Result<i64, ClientError> {
        self.client()
            .get_data("/fut/v1/public/time", &Params::new(), false)
            .await
    }

    /// Contract details for one symbol.
    pub async fn symbol_detail(&self, symbol: &str) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        self.client()
            .get_data("/fut/v1/public/symbol/detail", &params, false)
            .await
    }

    /// Ticker for one contract.
    pub async fn ticker(&self, symbol: &str) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        self.client()
            .get_data("/fut/v1/public/q/ticker", &params, false)
            .await
    }

    /// Tickers for every listed contract.
    pub async fn tickers(&self) -> Result<serde_json::Value, ClientError> {
        self.client()
            .get_data("/fut/v1/public/q/tickers", &Params::new(), false)
            .await
    }

    /// Order book snapshot with `level` price levels per side.
    pub async fn depth(&self, symbol: &str, level: u32) -> Result<Depth, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("level".to_string(), level.to_string());
        self.client()
            .get_data("/fut/v1/public/q/depth", &params, false)
            .await
    }

    /// Candlesticks for one contract.
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
            .get_data("/fut/v1/public/q/kline", &params, false)
            .await
    }

    /// Most recent trades; `num` is the number of entries to return.
    pub async fn deals(&self, symbol: &str, num: u32) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("num".to_string(), num.to_string());
        self.client()
            .get_data("/fut/v1/public/q/deal", &params, false)
            .await
    }
}
