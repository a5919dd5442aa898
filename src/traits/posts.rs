//! Remote posts collection abstraction.

use async_trait::async_trait;

use crate::error::ChitChatResult;
use crate::models::{NewPost, Page, Post, Tag};

/// Operations against the remote, paginated posts collection.
///
/// Implementations are stateless request/response executors: no caching and
/// no local mutation. Every failure is surfaced to the caller as a typed
/// `ChitChatError`; 401/403 on the mutating calls become `AuthError`s.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch one page of the public collection. `page >= 1`, `limit >= 1`.
    async fn fetch_page(&self, page: u32, limit: u32) -> ChitChatResult<Page>;

    /// All posts matching `query`. Unpaginated: `total_count == items.len()`.
    async fn search(&self, query: &str) -> ChitChatResult<Page>;

    /// Flip the current user's like on a post.
    async fn toggle_like(&self, item_id: &str) -> ChitChatResult<()>;

    /// Delete a post. Ownership is enforced server-side.
    async fn delete_item(&self, item_id: &str) -> ChitChatResult<()>;

    /// Create a post from an already-validated payload.
    async fn create_item(&self, payload: &NewPost) -> ChitChatResult<Post>;

    /// Fetch a single post for the detail view.
    async fn fetch_post(&self, item_id: &str) -> ChitChatResult<Post>;

    /// Tag catalog offered by the create form.
    async fn fetch_tags(&self) -> ChitChatResult<Vec<Tag>>;
}
