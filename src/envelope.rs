//! Request and response envelopes.
//!
//! The host decodes the wire-level invocation event into a [`Request`],
//! passes it to the router, and re-encodes the returned [`Response`].
//! Payloads travel through the router uninspected: the body of a request
//! and the body (or error) of a response are opaque, self-describing
//! JSON units.

use serde::{Deserialize, Serialize};

/// Opaque payload carried by requests and responses.
///
/// Already decoded from the wire; the router never looks inside it.
pub type Payload = serde_json::Value;

/// An inbound event which can be routed.
///
/// `procedure` names the handler which should handle the request and
/// `body` is passed to that handler untouched. The name is matched
/// exactly - case-sensitive, untrimmed, and the empty string is a legal
/// (if unusual) procedure name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Name of the procedure to invoke.
    pub procedure: String,
    /// Opaque payload handed to the handler. Defaults to JSON `null`
    /// when the wire event omits the field.
    #[serde(default)]
    pub body: Payload,
}

impl Request {
    /// Create a request for the given procedure.
    pub fn new(procedure: impl Into<String>, body: Payload) -> Self {
        Self {
            procedure: procedure.into(),
            body,
        }
    }
}

/// The normalized outcome of a dispatched request.
///
/// Exactly one of `body` and `error` is populated: `body` when the
/// handler succeeded, `error` when it failed and its error was encoded
/// into a payload. The absent field is omitted from the serialized form
/// entirely rather than written as `null`.
///
/// NOTE: Errors returned from a handler are never propagated as a call
/// failure; they arrive here, inside the envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    /// Success payload returned by the handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Payload>,
    /// Encoded handler error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Payload>,
}

impl Response {
    /// Build a success response.
    pub fn success(body: Payload) -> Self {
        Self {
            body: Some(body),
            error: None,
        }
    }

    /// Build an error response from an already-encoded error payload.
    pub fn failure(error: Payload) -> Self {
        Self {
            body: None,
            error: Some(error),
        }
    }

    /// Check if this response carries an encoded handler error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_request() {
        let req: Request =
            serde_json::from_str(r#"{"procedure":"Do","body":{"key":"value"}}"#).unwrap();
        assert_eq!(req, Request::new("Do", json!({"key": "value"})));
    }

    #[test]
    fn test_deserialize_request_without_body() {
        let req: Request = serde_json::from_str(r#"{"procedure":"Do"}"#).unwrap();
        assert_eq!(req.procedure, "Do");
        assert_eq!(req.body, Payload::Null);
    }

    #[test]
    fn test_serialize_success_omits_error_field() {
        let rsp = Response::success(json!({"ok": true}));
        let encoded = serde_json::to_string(&rsp).unwrap();
        assert_eq!(encoded, r#"{"body":{"ok":true}}"#);
    }

    #[test]
    fn test_serialize_failure_omits_body_field() {
        let rsp = Response::failure(json!("boom"));
        let encoded = serde_json::to_string(&rsp).unwrap();
        assert_eq!(encoded, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_is_error() {
        assert!(!Response::success(json!(1)).is_error());
        assert!(Response::failure(json!("nope")).is_error());
    }
}
