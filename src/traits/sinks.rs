//! Upstream collaborators consumed by the client and the view model.

use std::fmt;

use crate::models::CurrentUser;

/// Supplies the bearer credential and the identity of the signed-in user.
pub trait SessionProvider: Send + Sync {
    /// Token attached as `Authorization: Bearer <token>` to every request.
    fn bearer_token(&self) -> Option<String>;

    /// The signed-in user, if any.
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Accepts user-facing notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Performs navigation requested by the view model.
pub trait NavigationSink: Send + Sync {
    /// Send the user to the login screen after an authorization failure.
    fn redirect_to_login(&self);
}
