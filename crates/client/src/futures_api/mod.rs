//! Typed wrappers for the futures endpoints (`/fut/v1/...`).
//!
//! Public market data lives under `public` and needs no credentials;
//! everything else is signed. The module is named `futures_api` to
//! stay clear of the `futures` crate.

mod account;
mod market;
mod order;
mod position;

pub use account::BillsQuery;
pub use order::{FuturesOrderRequest, OrderListQuery, ProfitEntrustRequest};
pub use position::MarginAdjustType;

use crate::http::ApiClient;

/// Futures endpoint wrappers borrowed from an [`ApiClient`].
///
/// Obtained via [`ApiClient::futures`].
pub struct FuturesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FuturesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> &ApiClient {
        self.client
    }
}
