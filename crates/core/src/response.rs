//! The uniform response envelope returned by every HashEx endpoint.
//!
//! Every REST response is a JSON object with exactly three fields:
//! `{"code": <int>, "msg": <string|null>, "data": <payload|null>}`.
//! The envelope itself enforces nothing -- any combination of fields is
//! representable, and consistency between `code` and `msg` is the
//! server's business, not ours.

use serde::{Deserialize, Serialize};

/// Generic API response envelope.
///
/// `T` is the endpoint-specific payload type; it stays opaque to this
/// struct. Instances are built once per response and read, not shared --
/// there is no synchronization, and callers that hand one across tasks
/// should treat it as immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code. `0` and `200..300` mean success by convention; the
    /// envelope does not restrict the domain beyond that.
    pub code: i32,
    /// Human-readable result description.
    pub msg: Option<String>,
    /// Endpoint payload; absent on most failures and on endpoints that
    /// return nothing.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Build a fully-populated envelope.
    pub fn new(code: i32, msg: Option<String>, data: Option<T>) -> Self {
        Self { code, msg, data }
    }

    /// Build a success envelope (`code = 0`) around a payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            msg: None,
            data: Some(data),
        }
    }

    /// Build a failure envelope with no payload.
    pub fn err(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: Some(msg.into()),
            data: None,
        }
    }

    /// Whether this response reports success.
    ///
    /// True iff `code == 0` or `code` is in `200..300`. The exchange
    /// mixes an RPC-style zero code with HTTP-style 2xx codes depending
    /// on the endpoint; both must be accepted.
    pub fn is_success(&self) -> bool {
        self.code == 0 || (200..300).contains(&self.code)
    }

    /// Consume the envelope and take the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

// A manual impl instead of `#[derive(Default)]` so `T` itself does not
// have to be `Default`.
impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            code: 0,
            msg: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_code(code: i32) -> ApiResponse<()> {
        ApiResponse::new(code, None, None)
    }

    #[test]
    fn zero_code_is_success() {
        assert!(with_code(0).is_success());
    }

    #[test]
    fn http_2xx_codes_are_success() {
        assert!(with_code(200).is_success());
        assert!(with_code(250).is_success());
        assert!(with_code(299).is_success());
    }

    #[test]
    fn codes_outside_both_conventions_fail() {
        assert!(!with_code(300).is_success());
        assert!(!with_code(404).is_success());
        assert!(!with_code(-1).is_success());
        assert!(!with_code(1).is_success());
        assert!(!with_code(199).is_success());
    }

    #[test]
    fn constructor_round_trip() {
        let resp = ApiResponse::new(404, Some("not found".to_string()), Some(vec![1, 2, 3]));
        assert_eq!(resp.code, 404);
        assert_eq!(resp.msg.as_deref(), Some("not found"));
        assert_eq!(resp.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn fields_can_be_overwritten() {
        let mut resp = ApiResponse::ok("first".to_string());
        resp.code = 500;
        resp.msg = Some("boom".to_string());
        resp.data = Some("second".to_string());
        assert_eq!(resp.code, 500);
        assert_eq!(resp.msg.as_deref(), Some("boom"));
        assert_eq!(resp.data.as_deref(), Some("second"));
    }

    #[test]
    fn default_is_empty_success() {
        let resp: ApiResponse<String> = ApiResponse::default();
        assert_eq!(resp.code, 0);
        assert!(resp.msg.is_none());
        assert!(resp.data.is_none());
        assert!(resp.is_success());
    }

    #[test]
    fn envelope_permits_inconsistent_fields() {
        // A zero code with an error message is representable; nothing
        // validates the combination.
        let resp: ApiResponse<()> = ApiResponse::new(0, Some("oops".to_string()), None);
        assert!(resp.is_success());
    }

    #[test]
    fn serializes_success_scenario() {
        let resp = ApiResponse::new(
            0,
            Some("OK".to_string()),
            Some(serde_json::json!({"id": 42})),
        );
        assert!(resp.is_success());
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"code":0,"msg":"OK","data":{"id":42}}"#
        );
    }

    #[test]
    fn serializes_failure_scenario_with_null_data() {
        let resp: ApiResponse<serde_json::Value> = ApiResponse::err(404, "not found");
        assert!(!resp.is_success());
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"code":404,"msg":"not found","data":null}"#
        );
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let resp: ApiResponse<String> = serde_json::from_str(r#"{"code":0}"#).unwrap();
        assert_eq!(resp.code, 0);
        assert!(resp.msg.is_none());
        assert!(resp.data.is_none());
    }

    #[test]
    fn deserializes_typed_payload() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Payload {
            id: i64,
        }

        let resp: ApiResponse<Payload> =
            serde_json::from_str(r#"{"code":0,"msg":"OK","data":{"id":42}}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.into_data(), Some(Payload { id: 42 }));
    }

    #[test]
    fn debug_format_renders_all_fields() {
        let resp = ApiResponse::new(404, Some("not found".to_string()), Some(1));
        let rendered = format!("{resp:?}");
        assert!(rendered.contains("404"));
        assert!(rendered.contains("not found"));
    }
}
