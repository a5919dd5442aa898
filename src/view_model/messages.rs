//! Results sent back from spawned fetch tasks.

use crate::error::{ChitChatError, ChitChatResult};
use crate::models::{Page, QueryState};
use crate::traits::PostsApi;

/// Which remote call a query state maps to. Search and paged browsing are
/// never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Page { page: u32, limit: u32 },
    Search(String),
}

impl FetchRequest {
    pub fn for_query(query: &QueryState) -> Self {
        if query.is_search_mode() {
            FetchRequest::Search(query.search_query.trim().to_string())
        } else {
            FetchRequest::Page {
                page: query.page,
                limit: query.limit,
            }
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            FetchRequest::Page { .. } => "fetch_page",
            FetchRequest::Search(_) => "search",
        }
    }

    pub async fn run<C: PostsApi + ?Sized>(&self, client: &C) -> ChitChatResult<Page> {
        match self {
            FetchRequest::Page { page, limit } => client.fetch_page(*page, *limit).await,
            FetchRequest::Search(query) => client.search(query).await,
        }
    }
}

/// A finished fetch, tagged with the trigger it was issued for.
#[derive(Debug)]
pub enum ListMessage {
    PageLoaded { trigger: u64, page: Page },
    PageLoadFailed { trigger: u64, error: ChitChatError },
}

impl ListMessage {
    pub fn trigger(&self) -> u64 {
        match self {
            ListMessage::PageLoaded { trigger, .. } | ListMessage::PageLoadFailed { trigger, .. } => {
                *trigger
            }
        }
    }
}

/// What `handle_message` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    Applied,
    /// Superseded by a newer trigger; dropped without any visible effect.
    Discarded,
}
