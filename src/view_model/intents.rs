//! User intents.
//!
//! Query intents write the new state through the adapter, bump the trigger
//! and fetch. Mutation intents await the remote call on the caller's turn;
//! on success they notify and refetch, on failure they notify and, for
//! authorization failures, ask for the login screen.

use super::{
    ListViewModel, CREATE_FAILED, CREATE_SUCCEEDED, DELETE_FAILED, DELETE_SUCCEEDED, LIKE_FAILED,
    LIKE_SUCCEEDED,
};
use crate::error::{AuthError, ChitChatError, ChitChatResult, ErrorContext};
use crate::models::{NewPostForm, Post, QueryUpdate};
use crate::traits::{Notification, ParamStore, PostsApi};

impl<C: PostsApi + 'static, S: ParamStore> ListViewModel<C, S> {
    /// Initial load.
    pub fn mount(&mut self) -> u64 {
        self.bump_and_fetch()
    }

    /// Refetch the current query, e.g. to retry after an error.
    pub fn refresh(&mut self) -> u64 {
        self.bump_and_fetch()
    }

    /// Go to page `page` (at least 1).
    pub fn set_page(&mut self, page: u32) -> u64 {
        self.query.write(QueryUpdate::new().page(page));
        self.bump_and_fetch()
    }

    /// Change the page size (at least 1). The page number is kept.
    pub fn set_limit(&mut self, limit: u32) -> u64 {
        self.query.write(QueryUpdate::new().limit(limit));
        self.bump_and_fetch()
    }

    /// Enter search mode, or go back to browsing with an empty query.
    /// Either way the page resets to 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> u64 {
        self.query
            .write(QueryUpdate::new().search_query(query).page(1));
        self.bump_and_fetch()
    }

    /// Move forward one page if there is one. Returns whether it moved.
    pub fn next_page(&mut self) -> bool {
        match self.pagination().next_page() {
            Some(page) => {
                self.set_page(page);
                true
            }
            None => false,
        }
    }

    /// Move back one page if not on the first. Returns whether it moved.
    pub fn prev_page(&mut self) -> bool {
        match self.pagination().prev_page() {
            Some(page) => {
                self.set_page(page);
                true
            }
            None => false,
        }
    }

    /// Flip the current user's like on `item_id`, then refetch.
    pub async fn like(&mut self, item_id: &str) -> ChitChatResult<()> {
        let result = self.client.toggle_like(item_id).await;
        self.finish_mutation(result, "toggle_like", item_id, LIKE_SUCCEEDED, LIKE_FAILED)
    }

    /// Delete `item_id`, then refetch. The refetched page may be empty.
    pub async fn delete(&mut self, item_id: &str) -> ChitChatResult<()> {
        let result = self.client.delete_item(item_id).await;
        self.finish_mutation(result, "delete_item", item_id, DELETE_SUCCEEDED, DELETE_FAILED)
    }

    /// Validate `form` and create the post, then refetch.
    ///
    /// Requires a signed-in user. Validation failures are returned without
    /// any request or notification. The page is not reset: new posts wait
    /// for approval and are not guaranteed to land on page 1.
    pub async fn create(&mut self, form: NewPostForm) -> ChitChatResult<Post> {
        let Some(author) = self.session.current_user() else {
            let err: ChitChatError = AuthError::NotAuthenticated.into();
            self.report_failure(&err, CREATE_FAILED);
            return Err(err);
        };

        let payload = form.validate(&author)?;
        let result = self.client.create_item(&payload).await;
        let id = result.as_ref().map(|p| p.id.clone()).unwrap_or_default();
        self.finish_mutation(result, "create_item", &id, CREATE_SUCCEEDED, CREATE_FAILED)
    }

    fn finish_mutation<T>(
        &mut self,
        result: ChitChatResult<T>,
        operation: &str,
        item_id: &str,
        success: &str,
        failure: &str,
    ) -> ChitChatResult<T> {
        match result {
            Ok(value) => {
                tracing::info!(operation = operation, item = %item_id, "mutation succeeded");
                self.notifier.notify(Notification::success(success));
                self.bump_and_fetch();
                Ok(value)
            }
            Err(err) => {
                let err = err.with_context(ErrorContext::new(operation).with_item_id(item_id));
                self.report_failure(&err, failure);
                Err(err)
            }
        }
    }

    fn report_failure(&self, err: &ChitChatError, message: &str) {
        tracing::warn!(code = err.error_code(), error = %err, "mutation failed");
        self.notifier.notify(Notification::error(message));
        if err.requires_login() {
            self.navigator.redirect_to_login();
        }
    }
}
