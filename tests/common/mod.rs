//! Common test utilities for integration tests.
//!
//! ```ignore
//! let h = ViewModelHarness::new("page=2");
//! h.api.set_page(2, fixture_page(10, 9, 20));
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use chitchat::adapters::mock::{MockPostsApi, RecordingNavigator, RecordingNotifier};
use chitchat::adapters::{InMemoryParamStore, StaticSession};
use chitchat::models::CurrentUser;
use chitchat::view_model::ListViewModel;

/// The signed-in user used by the harness.
pub fn test_user() -> CurrentUser {
    CurrentUser::new("test-user-id")
}

pub fn test_token() -> String {
    "test-auth-token".to_string()
}

/// A view model over a `MockPostsApi` with recording sinks.
pub struct ViewModelHarness {
    pub api: Arc<MockPostsApi>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub vm: ListViewModel<MockPostsApi, InMemoryParamStore>,
}

impl ViewModelHarness {
    /// Start from the query string `query` with a signed-in user.
    pub fn new(query: &str) -> Self {
        Self::build(query, Some(test_user()), Duration::from_secs(5))
    }

    pub fn anonymous(query: &str) -> Self {
        Self::build(query, None, Duration::from_secs(5))
    }

    pub fn with_timeout(query: &str, timeout: Duration) -> Self {
        Self::build(query, Some(test_user()), timeout)
    }

    fn build(query: &str, user: Option<CurrentUser>, timeout: Duration) -> Self {
        let api = Arc::new(MockPostsApi::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let token = user.as_ref().map(|_| test_token());
        let vm = ListViewModel::new(api.clone(), InMemoryParamStore::from_query_string(query))
            .with_session(Arc::new(StaticSession::new(token, user)))
            .with_notifier(notifier.clone())
            .with_navigator(navigator.clone())
            .with_fetch_timeout(timeout);
        Self {
            api,
            notifier,
            navigator,
            vm,
        }
    }
}
