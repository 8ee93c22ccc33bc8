//! Request signing for authenticated HashEx endpoints.
//!
//! Authenticated calls carry four headers: the access key, an
//! HMAC-SHA256 signature over the request parameters, a millisecond
//! timestamp, and a random nonce. The signature input is the
//! `key=value` pairs joined with `&` in ascending key order, followed
//! by `&timestamp=<millis>`.

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Header carrying the caller's access key.
pub const ACCESS_KEY_HEADER: &str = "X-Access-Key";
/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";
/// Header carrying the millisecond timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "X-Request-Timestamp";
/// Header carrying a per-request random nonce.
pub const NONCE_HEADER: &str = "X-Request-Nonce";

type HmacSha256 = Hmac<Sha256>;

/// The full set of authentication header values for one request.
#[derive(Debug, Clone)]
pub struct AuthHeaders {
    pub access_key: String,
    pub signature: String,
    pub timestamp: String,
    pub nonce: String,
}

impl AuthHeaders {
    /// Sign `params` with a fresh timestamp and nonce.
    pub fn sign(access_key: &str, secret_key: &str, params: &BTreeMap<String, String>) -> Self {
        let timestamp = generate_timestamp();
        let signature = generate_signature(secret_key, params, &timestamp);
        Self {
            access_key: access_key.to_string(),
            signature,
            timestamp,
            nonce: generate_nonce(),
        }
    }

    /// Iterate over `(header name, value)` pairs for attaching to a
    /// request or a WebSocket handshake.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (ACCESS_KEY_HEADER, self.access_key.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
            (TIMESTAMP_HEADER, self.timestamp.as_str()),
            (NONCE_HEADER, self.nonce.as_str()),
        ]
        .into_iter()
    }
}

/// Compute the hex-encoded HMAC-SHA256 signature for a request.
///
/// `params` must already be key-sorted; `BTreeMap` guarantees that.
/// With no parameters the signed string is just `&timestamp=<millis>`,
/// leading separator included -- the server computes it the same way,
/// so the quirk is load-bearing.
pub fn generate_signature(
    secret_key: &str,
    params: &BTreeMap<String, String>,
    timestamp: &str,
) -> String {
    let mut raw = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    raw.push_str("&timestamp=");
    raw.push_str(timestamp);

    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(raw.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Current time as a millisecond timestamp string.
pub fn generate_timestamp() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Random UUID-v4 nonce for a single request.
pub fn generate_nonce() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ---------------------------------------------------------------------------
// hex encoding helper (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let sig = generate_signature("secret", &params(&[("symbol", "BTC_USDT")]), "1700000000000");
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn signature_is_deterministic() {
        let p = params(&[("symbol", "BTC_USDT"), ("level", "10")]);
        assert_eq!(
            generate_signature("secret", &p, "1700000000000"),
            generate_signature("secret", &p, "1700000000000"),
        );
    }

    #[test]
    fn signature_covers_timestamp() {
        let p = params(&[("symbol", "BTC_USDT")]);
        assert_ne!(
            generate_signature("secret", &p, "1700000000000"),
            generate_signature("secret", &p, "1700000000001"),
        );
    }

    #[test]
    fn signature_depends_on_secret() {
        let p = params(&[("symbol", "BTC_USDT")]);
        assert_ne!(
            generate_signature("secret-a", &p, "1700000000000"),
            generate_signature("secret-b", &p, "1700000000000"),
        );
    }

    #[test]
    fn parameters_are_signed_in_key_order() {
        // BTreeMap sorts on insert, so insertion order must not matter.
        let a = params(&[("b", "2"), ("a", "1"), ("c", "3")]);
        let mut b = BTreeMap::new();
        b.insert("c".to_string(), "3".to_string());
        b.insert("a".to_string(), "1".to_string());
        b.insert("b".to_string(), "2".to_string());
        assert_eq!(
            generate_signature("secret", &a, "1"),
            generate_signature("secret", &b, "1"),
        );
    }

    #[test]
    fn empty_params_sign_only_the_timestamp() {
        // Known-answer: HMAC-SHA256("secret", "&timestamp=1700000000000").
        let sig = generate_signature("secret", &BTreeMap::new(), "1700000000000");
        let mut mac = HmacSha256::new_from_slice(b"secret").unwrap();
        mac.update(b"&timestamp=1700000000000");
        let expected = super::hex::encode(mac.finalize().into_bytes());
        assert_eq!(sig, expected);
    }

    #[test]
    fn timestamp_is_numeric_millis() {
        let ts = generate_timestamp();
        let millis: i64 = ts.parse().unwrap();
        // Sanity bound: after 2020-01-01 in milliseconds.
        assert!(millis > 1_577_836_800_000);
    }

    #[test]
    fn nonces_are_unique() {
        assert_ne!(generate_nonce(), generate_nonce());
    }

    #[test]
    fn auth_headers_expose_all_four_headers() {
        let headers = AuthHeaders::sign("ak", "sk", &params(&[("symbol", "ETH_USDT")]));
        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                ACCESS_KEY_HEADER,
                SIGNATURE_HEADER,
                TIMESTAMP_HEADER,
                NONCE_HEADER
            ]
        );
        assert_eq!(headers.access_key, "ak");
        assert_eq!(
            headers.signature,
            generate_signature("sk", &params(&[("symbol", "ETH_USDT")]), &headers.timestamp)
        );
    }
}
