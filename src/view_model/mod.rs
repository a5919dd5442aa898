//! List view model for the posts collection.
//!
//! Owns the query state (through its adapter), the fetch trigger, the load
//! status and the last good page. Fetches run as spawned tasks and report
//! back over a channel the view model owns; results are only applied when
//! the owner calls [`ListViewModel::process_next`] or
//! [`ListViewModel::settle`], and only if they belong to the latest trigger.

mod handlers;
mod intents;
mod messages;
mod state;
mod trigger;

pub use messages::{FetchRequest, ListMessage, MessageOutcome};
pub use state::LoadStatus;
pub use trigger::FetchTrigger;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::adapters::{StaticSession, TracingNavigator, TracingNotifier};
use crate::card::PostCardView;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::ChitChatError;
use crate::models::{CurrentUser, Page, Post, QueryState};
use crate::pagination::PaginationView;
use crate::query_state::QueryStateAdapter;
use crate::traits::{NavigationSink, NotificationSink, ParamStore, PostsApi, SessionProvider};

pub const FETCH_FAILED: &str = "Failed to fetch posts";
pub const LIKE_SUCCEEDED: &str = "Post has been liked successfully.";
pub const LIKE_FAILED: &str = "Failed to like the post. Please try again later.";
pub const DELETE_SUCCEEDED: &str = "Post deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete the post. Please try again later.";
pub const CREATE_SUCCEEDED: &str = "Post created successfully";
pub const CREATE_FAILED: &str = "Failed to create post";

/// View model behind the posts list.
///
/// ```ignore
/// let mut vm = ListViewModel::new(Arc::new(client), InMemoryParamStore::new());
/// vm.mount();
/// vm.settle().await;
/// for card in vm.cards() { println!("{}", card.title); }
/// ```
pub struct ListViewModel<C: PostsApi + 'static, S: ParamStore> {
    client: Arc<C>,
    query: QueryStateAdapter<S>,
    trigger: FetchTrigger,
    status: LoadStatus,
    page: Option<Page>,
    last_error: Option<ChitChatError>,
    message_tx: mpsc::UnboundedSender<ListMessage>,
    message_rx: mpsc::UnboundedReceiver<ListMessage>,
    /// Fetches spawned whose result has not been received yet
    outstanding: usize,
    session: Arc<dyn SessionProvider>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn NavigationSink>,
    fetch_timeout: Duration,
}

impl<C: PostsApi + 'static, S: ParamStore> ListViewModel<C, S> {
    pub fn new(client: Arc<C>, params: S) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client,
            query: QueryStateAdapter::new(params),
            trigger: FetchTrigger::new(),
            status: LoadStatus::Idle,
            page: None,
            last_error: None,
            message_tx,
            message_rx,
            outstanding: 0,
            session: Arc::new(StaticSession::anonymous()),
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(TracingNavigator::new()),
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = session;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn NavigationSink>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Upper bound on a single fetch. An expired fetch that is still
    /// current moves the list to `Error(Timeout)`.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn query(&self) -> QueryState {
        self.query.read()
    }

    pub fn params(&self) -> &S {
        self.query.store()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Last successfully loaded page, kept through later failures.
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn items(&self) -> &[Post] {
        self.page.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    pub fn total_count(&self) -> u64 {
        self.page.as_ref().map(|p| p.total_count).unwrap_or(0)
    }

    pub fn trigger(&self) -> u64 {
        self.trigger.current()
    }

    /// Error behind the current `Error` status, if any.
    pub fn last_error(&self) -> Option<&ChitChatError> {
        self.last_error.as_ref()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.session.current_user()
    }

    /// Pagination for browse mode. Search results are one unpaginated page,
    /// so while searching the bar has nowhere to go.
    pub fn pagination(&self) -> PaginationView {
        let query = self.query.read();
        if query.is_search_mode() {
            return PaginationView::single_page();
        }
        PaginationView::new(query.page, self.total_count(), query.limit)
    }

    /// Card bindings for the visible items.
    pub fn cards(&self) -> Vec<PostCardView> {
        let user = self.session.current_user();
        self.items()
            .iter()
            .map(|post| PostCardView::new(post, user.as_ref()))
            .collect()
    }
}
