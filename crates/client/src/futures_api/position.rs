//! Futures position management.

use hashex_core::types::PositionSide;

use crate::error::ClientError;
use crate::http::Params;

use super::FuturesApi;

/// Direction of an isolated-margin adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginAdjustType {
    Add,
    Sub,
}

impl MarginAdjustType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
        }
    }
}

impl FuturesApi<'_> {
    /// Open positions, optionally narrowed to one symbol.
    pub async fn positions(&self, symbol: Option<&str>) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), symbol.to_string());
        }
        self.client()
            .get_data("/fut/v1/position/list", &params, true)
            .await
    }

    /// Position configuration (leverage, margin mode) for a symbol.
    pub async fn position_confs(&self, symbol: &str) -> Result<serde_json::Value, ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        self.client()
            .get_data("/fut/v1/position/confs", &params, true)
            .await
    }

    /// Switch the position model (e.g. `AGGREGATION`) for a contract.
    pub async fn change_position_type(
        &self,
        symbol: &str,
        contract_type: &str,
        position_model: &str,
    ) -> Result<(), ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        params.insert("contractType".to_string(), contract_type.to_string());
        params.insert("positionModel".to_string(), position_model.to_string());
        self.client()
            .post_ok("/fut/v1/position/change-type", &params)
            .await
    }

    /// Change the leverage multiplier for one side of a symbol.
    pub async fn adjust_leverage(
        &self,
        symbol: &str,
        position_side: Option<PositionSide>,
        leverage: u32,
    ) -> Result<(), ClientError> {
        if leverage == 0 {
            return Err(ClientError::InvalidRequest(
                "leverage must be at least 1".to_string(),
            ));
        }
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        if let Some(side) = position_side {
            params.insert("positionSide".to_string(), side.as_str().to_string());
        }
        params.insert("leverage".to_string(), leverage.to_string());
        self.client()
            .post_ok("/fut/v1/position/adjust-leverage", &params)
            .await
    }

    /// Add or remove isolated margin on a position. `margin` is a
    /// decimal amount string.
    pub async fn adjust_margin(
        &self,
        symbol: &str,
        position_side: Option<PositionSide>,
        position_id: Option<i64>,
        margin: &str,
        adjust: MarginAdjustType,
    ) -> Result<(), ClientError> {
        let mut params = Params::new();
        params.insert("symbol".to_string(), symbol.to_string());
        if let Some(side) = position_side {
            params.insert("positionSide".to_string(), side.as_str().to_string());
        }
        if let Some(id) = position_id {
            params.insert("positionId".to_string(), id.to_string());
        }
        params.insert("margin".to_string(), margin.to_string());
        params.insert("type".to_string(), adjust.as_str().to_string());
        self.client().post_ok("/fut/v1/position/margin", &params).await
    }

    /// Close every open position, or every position on one symbol.
    pub async fn close_all_positions(&self, symbol: Option<&str>) -> Result<(), ClientError> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), symbol.to_string());
        }
        self.client()
            .post_ok("/fut/v1/position/close-all", &params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_adjust_wire_strings() {
        assert_eq!(MarginAdjustType::Add.as_str(), "ADD");
        assert_eq!(MarginAdjustType::Sub.as_str(), "SUB");
    }
}
