//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockPostsApi`] - posts collection with gated, scriptable responses
//! - [`RecordingNotifier`], [`RecordingNavigator`] - capture view model output

pub mod http;
pub mod posts;
pub mod sinks;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use posts::{fixture_page, fixture_post, MockCall, MockFailure, MockPostsApi, Operation};
pub use sinks::{RecordingNavigator, RecordingNotifier};
