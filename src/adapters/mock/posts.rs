//! Scriptable in-memory posts collection.
//!
//! Pages and search results are configured up front. Individual fetches can
//! be held open with a gate so tests control the order in which concurrent
//! responses arrive.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

use crate::error::{AuthError, ChitChatError, ChitChatResult, NetworkError};
use crate::models::{NewPost, Page, Post, PostAuthor, Tag};
use crate::traits::PostsApi;

/// One call made against the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    FetchPage { page: u32, limit: u32 },
    Search(String),
    ToggleLike(String),
    Delete(String),
    Create(NewPost),
    FetchPost(String),
    FetchTags,
}

/// Operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchPage,
    Search,
    ToggleLike,
    Delete,
    Create,
    FetchPost,
    FetchTags,
}

/// A failure the mock returns for an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// Non-success status from the server.
    Status(u16),
    /// 401 on a mutating call.
    Unauthorized,
    /// 403 on a mutating call.
    Forbidden,
    /// No response at all.
    ConnectionRefused,
    /// The call panics instead of returning.
    Panic,
}

impl MockFailure {
    fn to_error(&self) -> ChitChatError {
        match self {
            MockFailure::Status(status) => ChitChatError::server(*status, "mock failure"),
            MockFailure::Unauthorized => AuthError::Unauthorized {
                message: "mock unauthorized".to_string(),
            }
            .into(),
            MockFailure::Forbidden => AuthError::Forbidden {
                message: "mock forbidden".to_string(),
            }
            .into(),
            MockFailure::ConnectionRefused | MockFailure::Panic => {
                NetworkError::ConnectionFailed {
                    url: "mock://posts".to_string(),
                    message: "connection refused".to_string(),
                }
                .into()
            }
        }
    }
}

/// Build a post owned by `owner_id` with a recognizable title.
pub fn fixture_post(id: &str, owner_id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {}", id),
        body: format!("Body of post {}", id),
        image: String::new(),
        tags: vec![Tag::named("general")],
        author: PostAuthor {
            id: owner_id.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        },
        like_info: None,
        created_at: None,
    }
}

/// Build a page of `count` fixture posts whose ids start at `first_id`.
pub fn fixture_page(first_id: u32, count: u32, total_count: u64) -> Page {
    let items = (first_id..first_id + count)
        .map(|n| fixture_post(&n.to_string(), "owner"))
        .collect();
    Page::new(items, total_count)
}

/// In-memory `PostsApi` for view model tests.
#[derive(Debug, Default)]
pub struct MockPostsApi {
    pages: Mutex<HashMap<u32, Page>>,
    search_results: Mutex<HashMap<String, Page>>,
    posts: Mutex<HashMap<String, Post>>,
    tags: Mutex<Vec<Tag>>,
    failures: Mutex<HashMap<Operation, MockFailure>>,
    page_gates: Mutex<HashMap<u32, oneshot::Receiver<()>>>,
    search_gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockPostsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Response for `fetch_page(page, _)`. Unconfigured pages are empty
    /// with a zero count.
    pub fn set_page(&self, page: u32, result: Page) {
        self.pages.lock().unwrap().insert(page, result);
    }

    /// Response for `search(query)`. Unconfigured queries match nothing.
    pub fn set_search(&self, query: &str, items: Vec<Post>) {
        self.search_results
            .lock()
            .unwrap()
            .insert(query.to_string(), Page::from_search(items));
    }

    pub fn set_post(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id.clone(), post);
    }

    pub fn set_tags(&self, tags: Vec<Tag>) {
        *self.tags.lock().unwrap() = tags;
    }

    /// Make every call to `op` fail until cleared.
    pub fn fail(&self, op: Operation, failure: MockFailure) {
        self.failures.lock().unwrap().insert(op, failure);
    }

    pub fn clear_failure(&self, op: Operation) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Hold the next `fetch_page(page, _)` until the returned sender fires
    /// or is dropped.
    pub fn hold_page(&self, page: u32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.page_gates.lock().unwrap().insert(page, rx);
        tx
    }

    /// Hold the next `search(query)` until the returned sender fires or is
    /// dropped.
    pub fn hold_search(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.search_gates
            .lock()
            .unwrap()
            .insert(query.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fetch_page_calls(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::FetchPage { page, .. } => Some(page),
                _ => None,
            })
            .collect()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Search(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: Operation) -> ChitChatResult<()> {
        // Guard released before a scripted panic so the mutex is not poisoned.
        let failure = self.failures.lock().unwrap().get(&op).cloned();
        match failure {
            Some(MockFailure::Panic) => panic!("scripted panic in {:?}", op),
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostsApi for MockPostsApi {
    async fn fetch_page(&self, page: u32, limit: u32) -> ChitChatResult<Page> {
        self.record(MockCall::FetchPage { page, limit });
        let gate = self.page_gates.lock().unwrap().remove(&page);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.check(Operation::FetchPage)?;
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_else(Page::empty))
    }

    async fn search(&self, query: &str) -> ChitChatResult<Page> {
        self.record(MockCall::Search(query.to_string()));
        let gate = self.search_gates.lock().unwrap().remove(query);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.check(Operation::Search)?;
        Ok(self
            .search_results
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(Page::empty))
    }

    async fn toggle_like(&self, item_id: &str) -> ChitChatResult<()> {
        self.record(MockCall::ToggleLike(item_id.to_string()));
        self.check(Operation::ToggleLike)
    }

    async fn delete_item(&self, item_id: &str) -> ChitChatResult<()> {
        self.record(MockCall::Delete(item_id.to_string()));
        self.check(Operation::Delete)
    }

    async fn create_item(&self, payload: &NewPost) -> ChitChatResult<Post> {
        self.record(MockCall::Create(payload.clone()));
        self.check(Operation::Create)?;
        let mut post = fixture_post("created", &payload.user_id);
        post.title = payload.title.clone();
        post.body = payload.body.clone();
        post.tags = payload.tags.clone();
        post.image = payload.image.clone();
        Ok(post)
    }

    async fn fetch_post(&self, item_id: &str) -> ChitChatResult<Post> {
        self.record(MockCall::FetchPost(item_id.to_string()));
        self.check(Operation::FetchPost)?;
        self.posts
            .lock()
            .unwrap()
            .get(item_id)
            .cloned()
            .ok_or_else(|| ChitChatError::server(404, "Post not found"))
    }

    async fn fetch_tags(&self) -> ChitChatResult<Vec<Tag>> {
        self.record(MockCall::FetchTags);
        self.check(Operation::FetchTags)?;
        Ok(self.tags.lock().unwrap().clone())
    }
}
