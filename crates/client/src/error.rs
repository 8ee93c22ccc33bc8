//! Error taxonomy for the REST and WebSocket client.

/// Errors surfaced by [`ApiClient`](crate::ApiClient) and the endpoint
/// wrappers.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A request was rejected before it was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The endpoint needs signing but the client has no credentials.
    #[error("{0} requires credentials but none are configured")]
    MissingCredentials(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("HTTP error ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The exchange reported a failure inside the response envelope.
    #[error("exchange error ({code}): {msg}")]
    Exchange {
        /// Envelope `code` field.
        code: i32,
        /// Envelope `msg` field, empty when the server sent none.
        msg: String,
    },

    /// A success envelope arrived without the payload the endpoint
    /// is documented to return.
    #[error("{0} returned a success envelope with no data")]
    MissingData(&'static str),

    /// WebSocket connect or protocol failure.
    #[error("WebSocket error: {0}")]
    WebSocket(String),
}
