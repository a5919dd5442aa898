//! Recording notification and navigation sinks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::traits::{NavigationSink, Notification, NotificationSink, Severity};

/// Keeps every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }

    /// Messages with the given severity, in arrival order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message)
            .collect()
    }

    pub fn clear(&self) {
        self.received.lock().unwrap().clear();
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

/// Counts login redirects.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    login_redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_redirects(&self) -> usize {
        self.login_redirects.load(Ordering::SeqCst)
    }
}

impl NavigationSink for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.login_redirects.fetch_add(1, Ordering::SeqCst);
    }
}
