//! Error taxonomy for the Astrux client.
//!
//! Every failure surfaces as one [`Error`] variant; all variants carry the
//! same record: a message, the HTTP status when one was received, and the
//! parsed response body when one was available.
//!
//! ## Status Classification
//!
//! | Status | Kind |
//! |--------|-----------------|
//! | 401    | `Authentication` |
//! | 404    | `NotFound`       |
//! | 429    | `RateLimit`      |
//! | 400, 422 | `Validation`   |
//! | >= 500 | `Server`         |
//! | other non-2xx | `Other`   |

use serde_json::Value;
use thiserror::Error;

/// Unified error type for the Astrux client.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid, expired, or missing API key.
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        status: Option<u16>,
        payload: Option<Value>,
    },

    /// The requested model or resource does not exist.
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        status: Option<u16>,
        payload: Option<Value>,
    },

    /// Request rate limit exceeded.
    #[error("Rate limit error: {message}")]
    RateLimit {
        message: String,
        status: Option<u16>,
        payload: Option<Value>,
    },

    /// Malformed request, rejected either locally or by the server.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        status: Option<u16>,
        payload: Option<Value>,
    },

    /// Server-side failure.
    #[error("Server error: {message}")]
    Server {
        message: String,
        status: Option<u16>,
        payload: Option<Value>,
    },

    /// Catch-all: unclassified statuses, timeouts, transport failures.
    #[error("Astrux error: {message}")]
    Other {
        message: String,
        status: Option<u16>,
        payload: Option<Value>,
    },
}

impl Error {
    /// Create a local validation error (no HTTP exchange happened).
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    /// Create a local authentication error (no HTTP exchange happened).
    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    /// Create a generic client-side error.
    pub(crate) fn other(message: impl Into<String>) -> Self {
        Error::Other {
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    /// Classify a non-success HTTP response.
    ///
    /// The message is the payload's `detail` field when it is a string,
    /// else the raw body text, else `HTTP <status>`. The status code and
    /// the parsed payload (when the body parsed as JSON) ride along on the
    /// returned variant.
    pub fn from_http_status(status: u16, body_text: &str, payload: Option<Value>) -> Self {
        let message = payload
            .as_ref()
            .and_then(|p| p.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| {
                if body_text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body_text.to_owned()
                }
            });
        let code = status;
        let status = Some(status);

        match code {
            401 => Error::Authentication {
                message,
                status,
                payload,
            },
            404 => Error::NotFound {
                message,
                status,
                payload,
            },
            429 => Error::RateLimit {
                message,
                status,
                payload,
            },
            400 | 422 => Error::Validation {
                message,
                status,
                payload,
            },
            s if s >= 500 => Error::Server {
                message,
                status,
                payload,
            },
            _ => Error::Other {
                message,
                status,
                payload,
            },
        }
    }

    /// The raw message, without the kind prefix that `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            Error::Authentication { message, .. }
            | Error::NotFound { message, .. }
            | Error::RateLimit { message, .. }
            | Error::Validation { message, .. }
            | Error::Server { message, .. }
            | Error::Other { message, .. } => message,
        }
    }

    /// HTTP status code, when the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. }
            | Error::NotFound { status, .. }
            | Error::RateLimit { status, .. }
            | Error::Validation { status, .. }
            | Error::Server { status, .. }
            | Error::Other { status, .. } => *status,
        }
    }

    /// Parsed response body attached to the error, when one was available.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Error::Authentication { payload, .. }
            | Error::NotFound { payload, .. }
            | Error::RateLimit { payload, .. }
            | Error::Validation { payload, .. }
            | Error::Server { payload, .. }
            | Error::Other { payload, .. } => payload.as_ref(),
        }
    }

    /// Short kind name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Authentication { .. } => "authentication",
            Error::NotFound { .. } => "not_found",
            Error::RateLimit { .. } => "rate_limit",
            Error::Validation { .. } => "validation",
            Error::Server { .. } => "server",
            Error::Other { .. } => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_classification() {
        let cases: Vec<(u16, &str)> = vec![
            (401, "authentication"),
            (404, "not_found"),
            (429, "rate_limit"),
            (400, "validation"),
            (422, "validation"),
            (500, "server"),
            (503, "server"),
            (418, "other"),
        ];
        for (status, kind) in cases {
            let err = Error::from_http_status(status, "boom", None);
            assert_eq!(err.kind(), kind, "status {} should map to {}", status, kind);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_detail_field_preferred_over_body_text() {
        let payload = json!({"detail": "slow down", "hint": "later"});
        let err = Error::from_http_status(429, r#"{"detail":"slow down","hint":"later"}"#, Some(payload.clone()));
        assert_eq!(err.message(), "slow down");
        assert_eq!(err.payload(), Some(&payload));
    }

    #[test]
    fn test_non_string_detail_falls_back_to_body_text() {
        let payload = json!({"detail": 7});
        let err = Error::from_http_status(500, r#"{"detail":7}"#, Some(payload));
        assert_eq!(err.message(), r#"{"detail":7}"#);
    }

    #[test]
    fn test_raw_text_used_when_payload_absent() {
        let err = Error::from_http_status(502, "bad gateway", None);
        assert_eq!(err.message(), "bad gateway");
        assert!(err.payload().is_none());
    }

    #[test]
    fn test_synthesized_message_for_empty_body() {
        let err = Error::from_http_status(500, "", None);
        assert_eq!(err.message(), "HTTP 500");
    }

    #[test]
    fn test_display_prefixes_kind() {
        let err = Error::from_http_status(429, "slow down", None);
        assert_eq!(err.to_string(), "Rate limit error: slow down");
    }

    #[test]
    fn test_local_errors_carry_no_status() {
        let err = Error::validation("`model` is required");
        assert_eq!(err.message(), "`model` is required");
        assert_eq!(err.status(), None);
        assert!(err.payload().is_none());
    }
}
