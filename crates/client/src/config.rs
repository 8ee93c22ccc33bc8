//! Client configuration.
//!
//! # Environment variables
//!
//! | Variable                    | Required | Default | Description                      |
//! |-----------------------------|----------|---------|----------------------------------|
//! | `HASHEX_BASE_URL`           | yes      | --      | REST base URL, e.g. `https://open.hashex.vip` |
//! | `HASHEX_ACCESS_KEY`         | no       | --      | API access key                   |
//! | `HASHEX_SECRET_KEY`         | no       | --      | API secret key                   |
//! | `HASHEX_CONNECT_TIMEOUT_MS` | no       | `10000` | TCP/TLS connect timeout          |
//! | `HASHEX_READ_TIMEOUT_MS`    | no       | `30000` | Whole-request timeout            |

use std::time::Duration;

use crate::error::ClientError;

/// Default connect timeout (10 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default whole-request timeout (30 seconds).
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(30_000);

/// API key pair for authenticated endpoints.
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

// Secret key stays out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Connection settings for an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// REST base URL without a trailing slash, e.g. `https://open.hashex.vip`.
    pub base_url: String,
    /// Key pair; `None` restricts the client to public endpoints.
    pub credentials: Option<Credentials>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl ApiConfig {
    /// Configuration for public (unauthenticated) endpoints only.
    pub fn public(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            credentials: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Configuration with an API key pair for authenticated endpoints.
    pub fn with_credentials(
        base_url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Some(Credentials::new(access_key, secret_key)),
            ..Self::public(base_url)
        }
    }

    /// Load configuration from the environment (and a `.env` file when
    /// present). Credentials are optional; timeouts fall back to the
    /// defaults when unset or unparseable.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("HASHEX_BASE_URL")
            .map_err(|_| ClientError::Config("HASHEX_BASE_URL is not set".to_string()))?;

        let credentials = match (
            std::env::var("HASHEX_ACCESS_KEY"),
            std::env::var("HASHEX_SECRET_KEY"),
        ) {
            (Ok(access), Ok(secret)) => Some(Credentials::new(access, secret)),
            (Err(_), Err(_)) => None,
            _ => {
                return Err(ClientError::Config(
                    "HASHEX_ACCESS_KEY and HASHEX_SECRET_KEY must be set together".to_string(),
                ))
            }
        };

        Ok(Self {
            base_url: trim_trailing_slash(base_url),
            credentials,
            connect_timeout: env_millis("HASHEX_CONNECT_TIMEOUT_MS", DEFAULT_CONNECT_TIMEOUT),
            read_timeout: env_millis("HASHEX_READ_TIMEOUT_MS", DEFAULT_READ_TIMEOUT),
        })
    }
}

fn env_millis(var: &str, default: Duration) -> Duration {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
