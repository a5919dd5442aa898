//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport (GET, POST, DELETE)
//! - [`PostsApi`] - the remote posts collection
//! - [`ParamStore`] - URL-style parameter storage
//! - [`SessionProvider`], [`NotificationSink`], [`NavigationSink`] -
//!   upstream collaborators of the list view model

pub mod http;
pub mod params;
pub mod posts;
pub mod sinks;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use params::ParamStore;
pub use posts::PostsApi;
pub use sinks::{
    NavigationSink, Notification, NotificationSink, SessionProvider, Severity,
};
