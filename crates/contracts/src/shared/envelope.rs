//! The `{ success, data, message }` wrapper every REST response uses.
//!
//! Responses are decoded once at the client boundary into
//! `Result<T, ApiError>`; call sites never look at `success` themselves.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown for every failure that has no server-provided text
pub const OPERATION_FAILED: &str = "Operation failed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Turn the envelope into a result, requiring `data` on success.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::from_message(self.message));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }

    /// Turn the envelope into a result for calls whose payload is irrelevant
    /// (delete, status change). Returns the server message, if any.
    pub fn into_ack(self) -> Result<Option<String>, ApiError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::from_message(self.message))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a readable envelope (network error, CORS,
    /// non-JSON error page)
    #[error("request failed: {0}")]
    Transport(String),
    /// `success: false` with the server's message
    #[error("{0}")]
    Application(String),
    /// The envelope was malformed or lacked the expected payload
    #[error("unexpected response: {0}")]
    Decode(String),
    /// No session to attach credentials from
    #[error("not authenticated")]
    Unauthenticated,
}

impl ApiError {
    fn from_message(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => ApiError::Application(m),
            _ => ApiError::Application(OPERATION_FAILED.to_string()),
        }
    }

    /// Text for the error banner. Server messages are shown as-is; every
    /// transport or decoding problem collapses to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application(m) => m.clone(),
            ApiError::Unauthenticated => "Please log in again".to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => OPERATION_FAILED.to_string(),
        }
    }

    /// Whether the failure should be written to the console log
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

fn parse_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    serde_json::from_str::<ApiEnvelope<T>>(body).map_err(|e| {
        if (200..300).contains(&status) {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(format!("HTTP {}", status))
        }
    })
}

/// Decode a raw HTTP response body into the payload.
///
/// Non-2xx responses that still carry an envelope surface their `message`;
/// those without one become `Transport`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    parse_envelope::<T>(status, body)?.into_result()
}

/// Same as `decode_response` for calls without a meaningful payload.
pub fn decode_ack(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    parse_envelope::<serde_json::Value>(status, body)?.into_ack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_success_with_data() {
        let body = r#"{"success":true,"data":{"name":"Shoes"}}"#;
        let item: Item = decode_response(200, body).unwrap();
        assert_eq!(item.name, "Shoes");
    }

    #[test]
    fn test_application_failure_keeps_server_message() {
        let body = r#"{"success":false,"message":"Failed to load categories"}"#;
        let err = decode_response::<Vec<Item>>(200, body).unwrap_err();
        assert_eq!(err, ApiError::Application("Failed to load categories".into()));
        assert_eq!(err.user_message(), "Failed to load categories");
        assert!(!err.is_unexpected());
    }

    #[test]
    fn test_failure_without_message_is_generic() {
        let err = decode_response::<Item>(400, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.user_message(), OPERATION_FAILED);
    }

    #[test]
    fn test_error_page_is_transport_failure() {
        let err = decode_response::<Item>(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Transport("HTTP 502".into()));
        assert_eq!(err.user_message(), OPERATION_FAILED);
        assert!(err.is_unexpected());
    }

    #[test]
    fn test_malformed_success_body_is_decode_failure() {
        let err = decode_response::<Item>(200, r#"{"success":true,"data":{"nom":1}}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_success_without_data() {
        let err = decode_response::<Item>(200, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let ack = decode_ack(200, r#"{"success":true,"message":"Deleted"}"#).unwrap();
        assert_eq!(ack.as_deref(), Some("Deleted"));
    }

    #[test]
    fn test_ack_failure() {
        let err = decode_ack(404, r#"{"success":false,"message":"Product not found"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "Product not found");
    }
}
