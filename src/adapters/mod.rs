//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`InMemoryParamStore`] - query-string parameter store
//! - [`StaticSession`] - token and user fixed at startup
//! - [`TracingNotifier`], [`TracingNavigator`] - sinks that write to the log
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockPostsApi`] - Scriptable posts collection
//! - [`mock::RecordingNotifier`] - Captured notifications

pub mod log_sinks;
pub mod memory_params;
pub mod mock;
pub mod reqwest_http;
pub mod static_session;

pub use log_sinks::{TracingNavigator, TracingNotifier};
pub use memory_params::InMemoryParamStore;
pub use mock::{MockHttpClient, MockPostsApi, RecordingNavigator, RecordingNotifier};
pub use reqwest_http::ReqwestHttpClient;
pub use static_session::StaticSession;
