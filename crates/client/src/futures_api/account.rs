//! Futures account endpoints: balances, bills, and the user-stream
//! listen key.

use crate::error::ClientError;
use crate::http::Params;

use super::FuturesApi;

/// Filters for [`FuturesApi::balance_bills`].
#[derive(Debug, Clone, Default)]
pub struct BillsQuery {
    pub coin: Option<String>,
    pub symbol: Option<String>,
    pub balance_type: Option<String>,
    /// Bill type filter (funding fee, trade fee, transfer, ...).
    pub bill_type: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl BillsQuery {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(coin) = &self.coin {
            params.insert("coin".to_string(), coin.clone());
        }
        if let Some(symbol) = &self.symbol {
            params.insert("symbol".to_string(), symbol.clone());
        }
        if let Some(balance_type) = &self.balance_type {
            params.insert("balanceType".to_string(), balance_type.clone());
        }
        if let Some(bill_type) = &self.bill_type {
            params.insert("type".to_string(), bill_type.clone());
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

impl FuturesApi<'_> {
    /// Futures account balances, optionally for one coin.
    pub async fn balances(&self, coin: Option<&str>) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        if let Some(coin) = coin {
            params.insert("coin".to_string(), coin.to_string());
        }
        self.client()
            .get_data("/fut/v1/balance/list", &params, true)
            .await
    }

    /// Balance change history (fees, funding, transfers).
    pub async fn balance_bills(
        &self,
        query: &BillsQuery,
    ) -> Result<serde_json::Value, ClientError> {
        self.client()
            .get_data("/fut/v1/balance/bills", &query.to_params(), true)
            .await
    }

    /// Fetch the listen key for subscribing to the futures user stream
    /// (see [`crate::ws`]).
    pub async fn listen_key(&self) -> Result<String, ClientError> {
        self.client()
            .get_data("/fut/v1/user/listen-key", &Params::new(), true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bills_query_maps_type_param() {
        let query = BillsQuery {
            coin: Some("usdt".to_string()),
            bill_type: Some("FUNDING_FEE".to_string()),
            page: Some(1),
            ..Default::default()
        };
        let params = query.to_params();
        assert_eq!(params["coin"], "usdt");
        assert_eq!(params["type"], "FUNDING_FEE");
        assert_eq!(params["page"], "1");
        assert!(!params.contains_key("symbol"));
    }
}
