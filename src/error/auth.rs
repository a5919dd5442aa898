//! Authentication and authorization error types.

use std::fmt;

/// Authentication-specific error variants.
///
/// Raised when the server rejects a mutating request with 401/403, or when a
/// request that needs a signed-in user is attempted without one.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No credential or current user is available.
    NotAuthenticated,

    /// Server answered 401.
    Unauthorized { message: String },

    /// Server answered 403.
    Forbidden { message: String },
}

impl AuthError {
    /// Build from an HTTP status. Returns `None` for non-auth statuses.
    pub fn from_status(status: u16, message: impl Into<String>) -> Option<Self> {
        match status {
            401 => Some(AuthError::Unauthorized {
                message: message.into(),
            }),
            403 => Some(AuthError::Forbidden {
                message: message.into(),
            }),
            _ => None,
        }
    }

    /// HTTP status this error corresponds to, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::NotAuthenticated => None,
            AuthError::Unauthorized { .. } => Some(401),
            AuthError::Forbidden { .. } => Some(403),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotAuthenticated => {
                "You are not logged in. Please log in to continue.".to_string()
            }
            AuthError::Unauthorized { .. } => {
                "Your session has expired. Please log in again.".to_string()
            }
            AuthError::Forbidden { .. } => {
                "Access denied. You don't have permission for this action.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "E_AUTH_NONE",
            AuthError::Unauthorized { .. } => "E_AUTH_401",
            AuthError::Forbidden { .. } => "E_AUTH_403",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::Unauthorized { message } => write!(f, "Unauthorized (401): {}", message),
            AuthError::Forbidden { message } => write!(f, "Forbidden (403): {}", message),
        }
    }
}

impl std::error::Error for AuthError {}
