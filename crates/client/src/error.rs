//! Error types for the AWX client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during AWX client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication configuration missing or rejected.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error (connection refused, timeout, TLS, body decode).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from AWX.
    ///
    /// `detail` is the `detail` string of the response body when AWX sent one;
    /// `message` is the best available one-line description.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        detail: Option<String>,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Maximum retries exceeded for rate-limited requests.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// The `detail` message AWX attached to this failure, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ApiError { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
            || matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }

    /// Check if this error is a transport failure (the server never answered).
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::InvalidUrl(_) => true,
            _ => false,
        }
    }

    /// Check if an HTTP status code is retried by the request helper.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, detail: Option<&str>) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://awx.example.com/api/v2/inventory_sources/".to_string(),
            message: detail.unwrap_or("Bad Request").to_string(),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_detail_only_for_api_errors() {
        assert_eq!(
            api_error(400, Some("An error occurred")).detail(),
            Some("An error occurred")
        );
        assert_eq!(api_error(400, None).detail(), None);
        assert_eq!(ClientError::InvalidResponse("x".to_string()).detail(), None);
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(api_error(401, None).is_auth_error());
        assert!(api_error(403, None).is_auth_error());
        assert!(ClientError::AuthFailed("missing".to_string()).is_auth_error());
        assert!(!api_error(400, None).is_auth_error());
    }

    #[test]
    fn test_status() {
        assert_eq!(api_error(500, None).status(), Some(500));
        assert_eq!(ClientError::MaxRetriesExceeded(4).status(), None);
    }

    #[test]
    fn test_display_includes_status_and_message() {
        let text = api_error(400, Some("An error occurred")).to_string();
        assert!(text.contains("400"));
        assert!(text.contains("An error occurred"));
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(ClientError::is_retryable_status(429));
        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(201));
    }
}
