//! HTTP-specific error types.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the Storefront API
//! - [`HttpError`]: Unified error type for everything that can go wrong once
//!   a request is built
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_check::clients::HttpError;
//!
//! match client.post_graphql(SHOP_NAME_QUERY).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Timeout(after)) => println!("No response after {after:?}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// The message is a compact JSON object built from the `errors`, `error`
/// and `error_description` fields of the response body, plus an
/// `error_reference` mentioning the `X-Request-Id` header when present.
///
/// # Example
///
/// ```rust
/// use storefront_check::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"[API] Invalid API key or access token"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().starts_with("HTTP 401"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// No complete response arrived within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A 2xx response whose body was not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Maps a transport error, separating timeouts from other failures.
    pub(crate) fn from_transport(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Network(error)
        }
    }

    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"HTTP 404: {"errors":"Not Found"}"#);
    }

    #[test]
    fn test_http_response_error_includes_request_id() {
        let error = HttpResponseError {
            code: 500,
            message: r#"{"error_reference":"If you report this error, please include this id: abc-123."}"#.to_string(),
            error_reference: Some("abc-123".to_string()),
        };
        assert_eq!(error.error_reference, Some("abc-123".to_string()));
        assert!(error.to_string().contains("abc-123"));
    }

    #[test]
    fn test_timeout_error_mentions_duration() {
        let error = HttpError::Timeout(Duration::from_secs(20));
        assert_eq!(error.to_string(), "Request timed out after 20s");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_decode_error_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = HttpError::from(source);
        assert!(error.to_string().starts_with("Response body is not valid JSON"));
    }

    #[test]
    fn test_status_is_exposed_for_response_errors() {
        let error = HttpError::from(HttpResponseError {
            code: 401,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert_eq!(error.status(), Some(401));
    }
}
