//! Client Errors
//!
//! Every failure a view can surface: validation caught before any request,
//! transport and API failures, and local storage problems.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Rejected on the client, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-success response, with the server's `detail` when it sent one
    #[error("request failed with status {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("storage unavailable: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Shape of the API's error bodies: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Build an HTTP error from the status and raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            });
        ApiError::Http { status, detail }
    }

    /// Message shown to the user: validation text or server detail, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Http { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_extracted() {
        let err = ApiError::from_response(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Http { status: 400, detail: Some("Email already registered".into()) }
        );
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn test_non_string_detail_uses_fallback() {
        // validation errors from the API come back as a list
        let err = ApiError::from_response(422, r#"{"detail":[{"loc":["body"],"msg":"x"}]}"#);
        assert_eq!(err.user_message("Booking failed. Please try again."), "Booking failed. Please try again.");
    }

    #[test]
    fn test_garbage_body_and_network_use_fallback() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.user_message("Failed"), "Failed");
        assert_eq!(ApiError::Network("offline".into()).user_message("Failed"), "Failed");
    }
}
