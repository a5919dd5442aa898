//! Network-related error types.
//!
//! These are failures where no usable response came back from the server.
//! HTTP status failures are not network errors; see `ChitChatError::Server`.

use std::fmt;
use std::time::Duration;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request did not complete in time.
    Timeout { operation: String, after: Duration },

    /// The URL could not be built or parsed.
    InvalidUrl { url: String },

    /// Response body could not be decoded.
    InvalidResponse { message: String },

    /// Generic transport error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => true,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { operation, after } => format!(
                "The {} operation timed out after {:?}. The server may be slow or unreachable.",
                operation, after
            ),
            NetworkError::InvalidUrl { url } => format!("The address '{}' is not valid.", url),
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Classify a transport-level `HttpError` raised while calling `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                operation: "HTTP request".to_string(),
                after: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { operation, after } => {
                write!(f, "{} timed out after {:?}", operation, after)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(NetworkError::Timeout {
            operation: "fetch".to_string(),
            after: Duration::from_secs(30)
        }
        .is_retryable());
        assert!(NetworkError::ConnectionFailed {
            url: "u".to_string(),
            message: "m".to_string()
        }
        .is_retryable());
        assert!(!NetworkError::InvalidResponse {
            message: "bad json".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_from_http_connection_failed_keeps_url() {
        let err = NetworkError::from_http(
            HttpError::ConnectionFailed("refused".to_string()),
            "http://localhost:4000/api/posts/all",
        );
        match err {
            NetworkError::ConnectionFailed { url, message } => {
                assert_eq!(url, "http://localhost:4000/api/posts/all");
                assert_eq!(message, "refused");
            }
            other => panic!("Expected ConnectionFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_from_http_timeout() {
        let err = NetworkError::from_http(HttpError::Timeout("slow".to_string()), "u");
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_display() {
        let err = NetworkError::Timeout {
            operation: "fetch posts".to_string(),
            after: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "fetch posts timed out after 30s");
        assert!(err.user_message().contains("after 30s"));
    }

    #[test]
    fn test_sub_second_timeout_keeps_precision() {
        let err = NetworkError::Timeout {
            operation: "fetch_page".to_string(),
            after: Duration::from_millis(50),
        };
        assert_eq!(err.to_string(), "fetch_page timed out after 50ms");
    }
}
