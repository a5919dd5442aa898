//! Page-button layout and next/prev availability.
//!
//! Pure functions of `(page, count, limit)`. There is always at least one
//! page, even for an empty collection.
//!
//! Long collections get a windowed bar: the first and last page plus
//! `BUTTON_RADIUS` pages either side of the current one. Skipped runs show
//! up as non-consecutive button numbers.

/// Number of pages for `count` items at `limit` per page, never below 1.
pub fn compute_pages(count: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let pages = count.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub fn can_go_next(page: u32, count: u64, limit: u32) -> bool {
    page < compute_pages(count, limit)
}

pub fn can_go_prev(page: u32) -> bool {
    page > 1
}

/// Pages shown either side of the current page.
pub const BUTTON_RADIUS: u32 = 2;

/// Page numbers that get a button, ascending and deduplicated.
pub fn visible_pages(page: u32, total_pages: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    if total_pages <= 2 * BUTTON_RADIUS + 3 {
        return (1..=total_pages).collect();
    }

    let mut pages = vec![1];
    let low = page.saturating_sub(BUTTON_RADIUS).max(2);
    let high = page.saturating_add(BUTTON_RADIUS).min(total_pages - 1);
    if low <= high {
        pages.extend(low..=high);
    }
    pages.push(total_pages);
    pages
}

/// One numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

impl PageButton {
    pub fn label(&self) -> String {
        self.number.to_string()
    }
}

/// Everything a pagination bar needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub buttons: Vec<PageButton>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    pub fn new(page: u32, count: u64, limit: u32) -> Self {
        let total_pages = compute_pages(count, limit);
        let buttons = visible_pages(page, total_pages)
            .into_iter()
            .map(|number| PageButton {
                number,
                active: number == page,
            })
            .collect();
        Self {
            page,
            total_pages,
            buttons,
            prev_enabled: can_go_prev(page),
            next_enabled: can_go_next(page, count, limit),
        }
    }

    /// A bar with only page 1 and both arrows disabled. Used for search
    /// results, which arrive unpaginated.
    pub fn single_page() -> Self {
        Self::new(1, 0, 1)
    }

    /// Whether a run of pages is skipped between `buttons[index - 1]` and
    /// `buttons[index]`.
    pub fn gap_before(&self, index: usize) -> bool {
        index > 0
            && self
                .buttons
                .get(index)
                .zip(self.buttons.get(index - 1))
                .is_some_and(|(cur, prev)| cur.number > prev.number + 1)
    }

    /// Page that "previous" would move to, if enabled.
    pub fn prev_page(&self) -> Option<u32> {
        self.prev_enabled.then(|| self.page - 1)
    }

    /// Page that "next" would move to, if enabled.
    pub fn next_page(&self) -> Option<u32> {
        self.next_enabled.then(|| self.page + 1)
    }
}
