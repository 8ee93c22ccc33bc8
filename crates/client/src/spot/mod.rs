//! Typed wrappers for the spot endpoints (`/spot/v1/...`).
//!
//! Market data lives under the public `p` prefix and needs no
//! credentials; trading and account calls live under `u` and are
//! signed.

mod account;
mod market;
mod order;

pub use account::SpotBalance;
pub use order::{OrderHistoryQuery, OrderRequest, ScrollDirection};

use crate::http::ApiClient;

/// Spot endpoint wrappers borrowed from an [`ApiClient`].
///
/// Obtained via [`ApiClient::spot`].
pub struct SpotApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SpotApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> &ApiClient {
        self.client
    }
}
