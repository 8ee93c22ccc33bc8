//! Signed HTTP transport over [`reqwest`].
//!
//! One quirk is inherited from the exchange's transport contract and
//! must not be "fixed": POST endpoints take their parameters in the URL
//! query string, never in a body, because the signature covers the
//! sorted parameter map and the server verifies it against the query.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use hashex_core::auth::AuthHeaders;
use hashex_core::ApiResponse;

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::futures_api::FuturesApi;
use crate::spot::SpotApi;

/// Sorted request parameters, matching what the signature covers.
pub type Params = BTreeMap<String, String>;

/// HTTP client for one HashEx environment.
///
/// Cheap to clone is not a goal here; wrap it in an `Arc` to share
/// across tasks. The inner [`reqwest::Client`] already pools
/// connections.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client from the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Build a client reusing an existing [`reqwest::Client`] (useful
    /// for sharing one connection pool across environments).
    pub fn with_http_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    /// REST base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether the client can call authenticated endpoints.
    pub fn has_credentials(&self) -> bool {
        self.config.credentials.is_some()
    }

    /// Typed spot endpoint wrappers.
    pub fn spot(&self) -> SpotApi<'_> {
        SpotApi::new(self)
    }

    /// Typed futures endpoint wrappers.
    pub fn futures(&self) -> FuturesApi<'_> {
        FuturesApi::new(self)
    }

    /// Send a GET request, optionally signed, and decode the envelope.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &Params,
        need_auth: bool,
    ) -> Result<ApiResponse<T>, ClientError> {
        let mut request = self
            .http
            .get(format!("{}{endpoint}", self.config.base_url))
            .query(params);

        if need_auth {
            request = self.attach_auth(request, endpoint, params)?;
        }

        let response = request.send().await?;
        Self::decode_envelope(endpoint, response).await
    }

    /// Send a signed POST request and decode the envelope.
    ///
    /// Parameters go into the query string (see the module docs); the
    /// request has no body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &Params,
    ) -> Result<ApiResponse<T>, ClientError> {
        let request = self
            .http
            .post(format!("{}{endpoint}", self.config.base_url))
            .query(params);
        let request = self.attach_auth(request, endpoint, params)?;

        let response = request.send().await?;
        Self::decode_envelope(endpoint, response).await
    }

    /// GET and unwrap the envelope, requiring a payload.
    pub async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &Params,
        need_auth: bool,
    ) -> Result<T, ClientError> {
        let envelope = self.get(endpoint, params, need_auth).await?;
        Self::require_data(endpoint, envelope)
    }

    /// POST and unwrap the envelope, requiring a payload.
    pub async fn post_data<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &Params,
    ) -> Result<T, ClientError> {
        let envelope = self.post(endpoint, params).await?;
        Self::require_data(endpoint, envelope)
    }

    /// POST and unwrap the envelope, ignoring any payload.
    pub async fn post_ok(
        &self,
        endpoint: &'static str,
        params: &Params,
    ) -> Result<(), ClientError> {
        let envelope: ApiResponse<serde_json::Value> = self.post(endpoint, params).await?;
        let _ = Self::check_envelope(envelope)?;
        Ok(())
    }

    // ---- private helpers ----

    fn attach_auth(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &'static str,
        params: &Params,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let creds = self
            .config
            .credentials
            .as_ref()
            .ok_or(ClientError::MissingCredentials(endpoint))?;

        let headers = AuthHeaders::sign(&creds.access_key, &creds.secret_key, params);
        let mut request = request;
        for (name, value) in headers.iter() {
            request = request.header(name, value);
        }
        Ok(request)
    }

    /// Check the HTTP status and decode the body as an [`ApiResponse`].
    async fn decode_envelope<T: DeserializeOwned>(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(endpoint, status = status.as_u16(), "request succeeded");
        Ok(serde_json::from_str(&body)?)
    }

    /// Turn a failure envelope into [`ClientError::Exchange`].
    fn check_envelope<T>(envelope: ApiResponse<T>) -> Result<Option<T>, ClientError> {
        if envelope.is_success() {
            Ok(envelope.into_data())
        } else {
            Err(ClientError::Exchange {
                code: envelope.code,
                msg: envelope.msg.unwrap_or_default(),
            })
        }
    }

    /// Like [`check_envelope`](Self::check_envelope), but a success
    /// envelope without data is an error.
    fn require_data<T>(
        endpoint: &'static str,
        envelope: ApiResponse<T>,
    ) -> Result<T, ClientError> {
        Self::check_envelope(envelope)?.ok_or(ClientError::MissingData(endpoint))
    }
}
