//! Error Types
//!
//! Backend failures and client-side validation failures. Every error is
//! scoped to the interaction that triggered it; none is fatal to the app.

use serde_json::Value;
use thiserror::Error;

/// Common result type for backend operations
pub type DomainResult<T> = Result<T, ApiError>;

/// Failure of a call to the REST backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from the backend; the session cookie is missing or expired
    #[error("not authenticated")]
    Unauthorized,
    /// Non-success status, with the server's message when it sent one
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a non-success status and its raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Server {
                status,
                message: extract_server_message(body),
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message shown to the user: the server's own message when available,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } => message.clone(),
            ApiError::Unauthorized => "Sesi berakhir, silakan login kembali.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// Checks `errors[0].msg` (validator output), then `message`, then `error`.
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let from_errors = value
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("msg"))
        .and_then(Value::as_str);

    from_errors
        .or_else(|| value.get("message").and_then(Value::as_str))
        .or_else(|| value.get("error").and_then(Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// A client-side check failed before any network call was made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_validator_message_wins() {
        let body = r#"{"errors":[{"msg":"Nama sudah dipakai"}],"message":"Bad Request"}"#;
        assert_eq!(extract_server_message(body), Some("Nama sudah dipakai".to_string()));
    }

    #[test]
    fn test_message_then_error_field() {
        assert_eq!(extract_server_message(r#"{"message":"Stok habis"}"#), Some("Stok habis".to_string()));
        assert_eq!(extract_server_message(r#"{"error":"boom"}"#), Some("boom".to_string()));
        assert_eq!(extract_server_message(r#"{"message":"  "}"#), None);
        assert_eq!(extract_server_message("<html>502</html>"), None);
    }

    #[test]
    fn test_user_message_fallback() {
        let with_message = ApiError::from_status(500, r#"{"message":"Database down"}"#);
        assert_eq!(with_message.user_message("Gagal"), "Database down");

        let without = ApiError::Network("offline".to_string());
        assert_eq!(without.user_message("Gagal"), "Gagal");
    }
}
