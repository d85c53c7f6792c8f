//! Error types for the CoinGecko client library.

use thiserror::Error;

/// The main error type for all CoinGecko client operations.
#[derive(Error, Debug)]
pub enum CoinGeckoError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// CoinGecko API returned a non-success status
    #[error("CoinGecko API error: {0}")]
    Api(ApiError),

    /// Response body with a success status could not be decoded as JSON
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required argument was not supplied by the caller.
    ///
    /// Raised before any network call is attempted. This is a
    /// programming-time bug at the call site, not a transport failure.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

/// A non-success HTTP response from the API, surfaced after the retry policy
/// was exhausted (or immediately for non-retryable requests).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code of the final response.
    pub status: u16,
    /// Decoded or raw error body.
    pub body: ErrorBody,
}

/// Error body as returned by the API.
///
/// `Raw` carries the body text verbatim when it is not valid JSON; its
/// presence is the decoding-failure indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(serde_json::Value),
    Raw(String),
}

impl ApiError {
    /// Classify a response body, decoding it as JSON when possible.
    pub fn from_body(status: u16, body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Self {
                status,
                body: ErrorBody::Json(value),
            },
            Err(_) => Self {
                status,
                body: ErrorBody::Raw(body),
            },
        }
    }

    /// Human-readable message from the error body, when present.
    ///
    /// CoinGecko uses `{"error": "..."}` for most failures and
    /// `{"status": {"error_message": "..."}}` for rate-limit responses.
    pub fn message(&self) -> Option<&str> {
        let ErrorBody::Json(value) = &self.body else {
            return None;
        };
        value
            .get("error")
            .and_then(|v| v.as_str())
            .or_else(|| {
                value
                    .get("status")
                    .and_then(|s| s.get("error_message"))
                    .and_then(|v| v.as_str())
            })
    }

    /// Whether the error body was valid JSON.
    pub fn is_decoded(&self) -> bool {
        matches!(self.body, ErrorBody::Json(_))
    }

    /// Check if this is a rate-limit rejection.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the failure originated on the server side.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ErrorBody::Json(value) => write!(f, "HTTP {}: {}", self.status, value),
            ErrorBody::Raw(text) => write!(f, "HTTP {} (undecodable body): {}", self.status, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_json_body() {
        let error = ApiError::from_body(404, r#"{"error":"coin not found"}"#.to_string());
        assert!(error.is_decoded());
        assert!(error.is_not_found());
        assert_eq!(error.message(), Some("coin not found"));
    }

    #[test]
    fn test_api_error_from_rate_limit_body() {
        let body = r#"{"status":{"error_code":429,"error_message":"You've exceeded the Rate Limit."}}"#;
        let error = ApiError::from_body(429, body.to_string());
        assert!(error.is_rate_limited());
        assert_eq!(error.message(), Some("You've exceeded the Rate Limit."));
    }

    #[test]
    fn test_api_error_from_undecodable_body() {
        let error = ApiError::from_body(502, "<html>Bad Gateway</html>".to_string());
        assert!(!error.is_decoded());
        assert!(error.is_server_error());
        assert_eq!(error.message(), None);
        assert!(error.to_string().contains("undecodable"));
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::from_body(500, r#"{"error":"internal"}"#.to_string());
        assert_eq!(error.to_string(), r#"HTTP 500: {"error":"internal"}"#);
    }
}
