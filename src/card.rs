//! Per-post card bindings.

use crate::models::{CurrentUser, Post};

/// Characters of the body shown on a card before the ellipsis.
pub const SNIPPET_CHARS: usize = 50;

/// What a post card shows, derived from a post and the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub snippet: String,
    pub image: String,
    pub like_count: usize,
    pub liked_by_me: bool,
    /// Only hides the control; the backend enforces ownership.
    pub can_delete: bool,
}

impl PostCardView {
    pub fn new(post: &Post, viewer: Option<&CurrentUser>) -> Self {
        let liked_by_me = viewer.map(|u| post.is_liked_by(&u.id)).unwrap_or(false);
        let can_delete = viewer
            .map(|u| u.is_admin() || u.id == post.owner_id())
            .unwrap_or(false);

        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.display_name(),
            date: post.created_at.map(|d| d.format("%d %b %Y").to_string()),
            tags: post.tags.iter().map(|t| format!("#{}", t.name)).collect(),
            snippet: snippet(&post.body),
            image: post.image.clone(),
            like_count: post.like_count(),
            liked_by_me,
            can_delete,
        }
    }
}

/// First `SNIPPET_CHARS` characters of `body`, followed by `...`.
pub fn snippet(body: &str) -> String {
    let head: String = body.chars().take(SNIPPET_CHARS).collect();
    format!("{}...", head)
}
