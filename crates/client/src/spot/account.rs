//! Spot account endpoints: balances and the user-stream token.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::Params;

use super::SpotApi;

/// Balance of a single coin in the spot account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotBalance {
    pub coin: String,
    /// Total balance (available + frozen).
    pub balance: String,
    /// Amount locked by open orders.
    pub freeze: String,
    pub available_balance: String,
    /// Estimated value in USDT.
    pub estimated_total_amount: Option<String>,
    /// Estimated value in CNY.
    pub estimated_cyn_amount: Option<String>,
}

impl SpotApi<'_> {
    /// Balances for one coin, or for every coin when `coin` is `None`.
    pub async fn balances(&self, coin: Option<&str>) -> Result<Vec<SpotBalance>, ClientError> {
        let mut params = Params::new();
        if let Some(coin) = coin {
            params.insert("coin".to_string(), coin.to_string());
        }
        self.client()
            .get_data("/spot/v1/u/balance/spot", &params, true)
            .await
    }

    /// Fetch the single-use token for subscribing to the spot user
    /// stream (see [`crate::ws`]).
    pub async fn ws_token(&self) -> Result<String, ClientError> {
        self.client()
            .get_data("/spot/v1/u/ws/token", &Params::new(), true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_parses_exchange_row() {
        let json = r#"{
            "coin": "USDT",
            "balance": "1250.5",
            "freeze": "50.0",
            "availableBalance": "1200.5",
            "estimatedTotalAmount": "1250.5",
            "estimatedCynAmount": "9000.1"
        }"#;
        let balance: SpotBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.coin, "USDT");
        assert_eq!(balance.available_balance, "1200.5");
    }

    #[test]
    fn estimate_fields_are_optional() {
        let json = r#"{"coin":"BTC","balance":"1","freeze":"0","availableBalance":"1"}"#;
        let balance: SpotBalance = serde_json::from_str(json).unwrap();
        assert!(balance.estimated_total_amount.is_none());
    }
}
