//! Notification and navigation sinks that report through `tracing`.
//!
//! Used by the CLI and as the view model's defaults when no UI is attached.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::traits::{NavigationSink, Notification, NotificationSink, Severity};

/// Forwards notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => {
                tracing::info!(severity = %notification.severity, "{}", notification.message)
            }
            Severity::Error => {
                tracing::error!(severity = %notification.severity, "{}", notification.message)
            }
        }
    }
}

/// Logs login redirects and counts them so a caller can react after the fact.
#[derive(Debug, Default)]
pub struct TracingNavigator {
    redirects: AtomicUsize,
}

impl TracingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl NavigationSink for TracingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
        tracing::warn!("authorization failed, redirecting to /login");
    }
}
