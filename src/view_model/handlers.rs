//! Fetch dispatch and result handling.

use std::sync::Arc;

use super::messages::{FetchRequest, ListMessage, MessageOutcome};
use super::state::LoadStatus;
use super::{ListViewModel, FETCH_FAILED};
use crate::error::{ChitChatResult, ErrorContext, NetworkError, ResultExt};
use crate::traits::{Notification, ParamStore, PostsApi};

impl<C: PostsApi + 'static, S: ParamStore> ListViewModel<C, S> {
    /// Bump the trigger and fetch for the current query state.
    pub(super) fn bump_and_fetch(&mut self) -> u64 {
        let trigger = self.trigger.bump();
        self.spawn_fetch(trigger);
        trigger
    }

    fn spawn_fetch(&mut self, trigger: u64) {
        let query = self.query.read();
        let request = FetchRequest::for_query(&query);
        tracing::debug!(
            trigger = trigger,
            page = query.page,
            limit = query.limit,
            operation = request.operation(),
            "fetch issued"
        );

        self.status = LoadStatus::Loading;
        self.outstanding += 1;

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let timeout = self.fetch_timeout;
        let page_number = query.page;

        let operation = request.operation();
        let fetch = tokio::spawn(async move {
            match tokio::time::timeout(timeout, request.run(client.as_ref())).await {
                Ok(result) => result,
                Err(_) => Err(NetworkError::Timeout {
                    operation: operation.to_string(),
                    after: timeout,
                }
                .into()),
            }
        });

        // Every issued fetch reports back, even if its task panicked.
        tokio::spawn(async move {
            let result: ChitChatResult<_> = match fetch.await {
                Ok(result) => result,
                Err(join_err) => {
                    tracing::error!(trigger = trigger, error = %join_err, "fetch task aborted");
                    Err(NetworkError::Other {
                        message: format!("{} task aborted: {}", operation, join_err),
                    }
                    .into())
                }
            };
            let result = result.with_context(|| {
                ErrorContext::new(operation)
                    .with_page(page_number)
                    .with_trigger(trigger)
            });

            let msg = match result {
                Ok(page) => ListMessage::PageLoaded { trigger, page },
                Err(error) => ListMessage::PageLoadFailed { trigger, error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Apply a finished fetch if it belongs to the latest trigger.
    pub fn handle_message(&mut self, msg: ListMessage) -> MessageOutcome {
        let trigger = msg.trigger();
        if !self.trigger.is_current(trigger) {
            tracing::debug!(
                trigger = trigger,
                current = self.trigger.current(),
                "discarding stale response"
            );
            return MessageOutcome::Discarded;
        }

        match msg {
            ListMessage::PageLoaded { page, .. } => {
                tracing::debug!(
                    trigger = trigger,
                    items = page.len(),
                    total = page.total_count,
                    "page loaded"
                );
                self.page = Some(page);
                self.last_error = None;
                self.status = LoadStatus::Ready;
            }
            ListMessage::PageLoadFailed { error, .. } => {
                tracing::warn!(
                    trigger = trigger,
                    code = error.error_code(),
                    error = %error,
                    "fetch failed"
                );
                self.status = LoadStatus::Error(error.kind());
                self.last_error = Some(error);
                self.notifier.notify(Notification::error(FETCH_FAILED));
            }
        }
        MessageOutcome::Applied
    }

    /// Wait for the next fetch result and handle it. Returns `None` when no
    /// fetch is outstanding.
    pub async fn process_next(&mut self) -> Option<MessageOutcome> {
        if self.outstanding == 0 {
            return None;
        }
        let msg = self.message_rx.recv().await?;
        self.outstanding -= 1;
        Some(self.handle_message(msg))
    }

    /// Handle results until the latest fetch has resolved. Stale fetches
    /// still running are left outstanding.
    pub async fn settle(&mut self) {
        while self.status.is_loading() {
            if self.process_next().await.is_none() {
                break;
            }
        }
    }

    /// Handle results until no fetch is outstanding, stale ones included.
    pub async fn drain(&mut self) {
        while self.process_next().await.is_some() {}
    }

    /// Number of fetches whose result has not been received.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }
}
