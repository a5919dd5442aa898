//! Response envelopes used by the backend.

use serde::Deserialize;

use crate::models::Post;

/// Every successful response wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload of the paged fetch.
#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub count: u64,
}

/// Error bodies carry a `message` when the backend has one.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Best-effort message from an error response body.
pub fn error_message(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}
