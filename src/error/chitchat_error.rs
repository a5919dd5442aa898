//! Unified error type for the ChitChat client.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::validation::ValidationError;
use crate::config::ConfigError;

/// Compact, copyable classification of a failure.
///
/// This is what the list view model stores in its `Error` state; the full
/// error goes to the notification sink and the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Timeout,
    Server(u16),
    Authorization,
    Validation,
    InvalidResponse,
    Configuration,
}

/// Unified error type.
///
/// The client layer never swallows failures; every call surfaces one of
/// these to its caller.
#[derive(Debug)]
pub enum ChitChatError {
    /// No usable response reached us.
    Network(NetworkError),

    /// Server answered with a non-success status that is not an auth failure.
    Server { status: u16, message: String },

    /// 401/403 on a mutating call, or no signed-in user.
    Auth(AuthError),

    /// Create-form input rejected before any request was made.
    Validation(ValidationError),

    /// Configuration could not be loaded.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<ChitChatError>,
        context: ErrorContext,
    },
}

impl ChitChatError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ChitChatError::Server {
            status,
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChitChatError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Client,
            ChitChatError::Network(_) => ErrorCategory::Network,
            ChitChatError::Server { .. } => ErrorCategory::Server,
            ChitChatError::Auth(_) => ErrorCategory::Auth,
            ChitChatError::Validation(_) => ErrorCategory::User,
            ChitChatError::Config(_) => ErrorCategory::Configuration,
            ChitChatError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ChitChatError::Network(NetworkError::Timeout { .. }) => ErrorKind::Timeout,
            ChitChatError::Network(NetworkError::InvalidResponse { .. }) => {
                ErrorKind::InvalidResponse
            }
            ChitChatError::Network(_) => ErrorKind::Network,
            ChitChatError::Server { status, .. } => ErrorKind::Server(*status),
            ChitChatError::Auth(_) => ErrorKind::Authorization,
            ChitChatError::Validation(_) => ErrorKind::Validation,
            ChitChatError::Config(_) => ErrorKind::Configuration,
            ChitChatError::WithContext { error, .. } => error.kind(),
        }
    }

    /// Check if the user can retry the same action.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChitChatError::Network(err) => err.is_retryable(),
            ChitChatError::Server { status, .. } => *status >= 500 || *status == 429,
            ChitChatError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    /// True when the UI must send the user to the login screen.
    pub fn requires_login(&self) -> bool {
        match self {
            ChitChatError::Auth(_) => true,
            ChitChatError::WithContext { error, .. } => error.requires_login(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ChitChatError::Network(err) => err.user_message(),
            ChitChatError::Server { status, .. } => match *status {
                400 => "The request was invalid. Please try again.".to_string(),
                404 => "The requested post was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The server is experiencing issues. Please try again later.".to_string()
                }
                _ => format!(
                    "The server returned an error (HTTP {}). Please try again.",
                    status
                ),
            },
            ChitChatError::Auth(err) => err.user_message(),
            ChitChatError::Validation(err) => err.user_message(),
            ChitChatError::Config(err) => err.to_string(),
            ChitChatError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChitChatError::Network(err) => err.error_code(),
            ChitChatError::Server { .. } => "E_SERVER",
            ChitChatError::Auth(err) => err.error_code(),
            ChitChatError::Validation(err) => err.error_code(),
            ChitChatError::Config(_) => "E_CONFIG",
            ChitChatError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        ChitChatError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ChitChatError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &ChitChatError {
        match self {
            ChitChatError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }
}

impl fmt::Display for ChitChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChitChatError::Network(err) => write!(f, "{}", err),
            ChitChatError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ChitChatError::Auth(err) => write!(f, "{}", err),
            ChitChatError::Validation(err) => write!(f, "{}", err),
            ChitChatError::Config(err) => write!(f, "{}", err),
            ChitChatError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for ChitChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChitChatError::Network(err) => Some(err),
            ChitChatError::Server { .. } => None,
            ChitChatError::Auth(err) => Some(err),
            ChitChatError::Validation(err) => Some(err),
            ChitChatError::Config(err) => Some(err),
            ChitChatError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for ChitChatError {
    fn from(err: NetworkError) -> Self {
        ChitChatError::Network(err)
    }
}

impl From<AuthError> for ChitChatError {
    fn from(err: AuthError) -> Self {
        ChitChatError::Auth(err)
    }
}

impl From<ValidationError> for ChitChatError {
    fn from(err: ValidationError) -> Self {
        ChitChatError::Validation(err)
    }
}

impl From<ConfigError> for ChitChatError {
    fn from(err: ConfigError) -> Self {
        ChitChatError::Config(err)
    }
}

impl From<serde_json::Error> for ChitChatError {
    fn from(err: serde_json::Error) -> Self {
        ChitChatError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}
