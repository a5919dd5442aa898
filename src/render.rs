//! Plain-text rendering of the list, a single post, and the tag catalog.

use std::fmt::Write;

use crate::card::PostCardView;
use crate::models::{CurrentUser, Post, Tag};
use crate::pagination::PaginationView;
use crate::traits::{ParamStore, PostsApi};
use crate::view_model::{ListViewModel, LoadStatus};

pub const EMPTY_STATE: &str = "No posts found.";

pub fn render_card(card: &PostCardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", card.id, card.title);
    let byline = match &card.date {
        Some(date) => format!("  by {} on {}", card.author, date),
        None => format!("  by {}", card.author),
    };
    let _ = writeln!(out, "{}", byline);
    if !card.tags.is_empty() {
        let _ = writeln!(out, "  {}", card.tags.join(" "));
    }
    let _ = writeln!(out, "  {}", card.snippet);

    let heart = if card.liked_by_me { "♥" } else { "♡" };
    let mut actions = format!("  {} {}", heart, card.like_count);
    if card.can_delete {
        actions.push_str("  [delete]");
    }
    let _ = writeln!(out, "{}", actions);
    out
}

/// `« [1] 2 3 »`, with disabled arrows shown as `·` and skipped pages as `…`.
pub fn render_pagination(view: &PaginationView) -> String {
    let prev = if view.prev_enabled { "«" } else { "·" };
    let next = if view.next_enabled { "»" } else { "·" };
    let mut parts = Vec::with_capacity(view.buttons.len() * 2);
    for (index, button) in view.buttons.iter().enumerate() {
        if view.gap_before(index) {
            parts.push("…".to_string());
        }
        if button.active {
            parts.push(format!("[{}]", button.label()));
        } else {
            parts.push(button.label());
        }
    }
    format!("{} {} {}", prev, parts.join(" "), next)
}

/// The whole list screen: status, cards (or the empty state) and, when
/// browsing, the pagination bar.
pub fn render_list<C, S>(vm: &ListViewModel<C, S>) -> String
where
    C: PostsApi + 'static,
    S: ParamStore,
{
    let mut out = String::new();
    let query = vm.query();

    if query.is_search_mode() {
        let _ = writeln!(out, "Search: {} ({} found)", query.search_query, vm.total_count());
    }
    match vm.status() {
        LoadStatus::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        LoadStatus::Error(_) => {
            let message = vm
                .last_error()
                .map(|e| e.user_message())
                .unwrap_or_else(|| "Something went wrong.".to_string());
            let _ = writeln!(out, "! {}", message);
        }
        LoadStatus::Idle | LoadStatus::Ready => {}
    }

    let cards = vm.cards();
    if cards.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_STATE);
    }
    for card in &cards {
        out.push_str(&render_card(card));
        out.push('\n');
    }

    if !query.is_search_mode() {
        let _ = writeln!(out, "{}", render_pagination(&vm.pagination()));
    }
    out
}

/// Full post, body untruncated.
pub fn render_post(post: &Post, viewer: Option<&CurrentUser>) -> String {
    let card = PostCardView::new(post, viewer);
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.title);
    match &card.date {
        Some(date) => {
            let _ = writeln!(out, "by {} on {}", card.author, date);
        }
        None => {
            let _ = writeln!(out, "by {}", card.author);
        }
    }
    if !card.tags.is_empty() {
        let _ = writeln!(out, "{}", card.tags.join(" "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.body);
    let _ = writeln!(out);

    let mine = if card.liked_by_me { " (including you)" } else { "" };
    let _ = writeln!(out, "{} likes{}", card.like_count, mine);
    out
}

pub fn render_tags(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags.\n".to_string();
    }
    tags.iter().map(|t| format!("#{}\n", t.name)).collect()
}
