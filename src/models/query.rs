/// Page used when the parameter store has none (or an unusable one).
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the parameter store has none (or an unusable one).
pub const DEFAULT_LIMIT: u32 = 9;

/// The list view's pagination and search parameters.
///
/// `page >= 1` and `limit >= 1` always hold. `page` is not clamped to the
/// number of available pages; an out-of-range page simply fetches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub limit: u32,
    pub search_query: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search_query: String::new(),
        }
    }
}

impl QueryState {
    /// Search and paged browsing are mutually exclusive; a blank query
    /// means browse mode.
    pub fn is_search_mode(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

/// A partial update to `QueryState`. `None` fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryUpdate {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search_query: Option<String>,
}

impl QueryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Apply onto `state`, keeping unspecified fields and enforcing the
    /// `page >= 1`, `limit >= 1` invariants.
    pub fn apply_to(&self, state: &QueryState) -> QueryState {
        QueryState {
            page: self.page.unwrap_or(state.page).max(1),
            limit: self.limit.unwrap_or(state.limit).max(1),
            search_query: self
                .search_query
                .clone()
                .unwrap_or_else(|| state.search_query.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = QueryState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 9);
        assert!(!state.is_search_mode());
    }

    #[test]
    fn test_blank_query_is_browse_mode() {
        let state = QueryState {
            search_query: "   ".to_string(),
            ..Default::default()
        };
        assert!(!state.is_search_mode());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let current = QueryState {
            page: 2,
            limit: 20,
            search_query: "cats".to_string(),
        };
        let next = QueryUpdate::new().page(5).apply_to(&current);
        assert_eq!(next.page, 5);
        assert_eq!(next.limit, 20);
        assert_eq!(next.search_query, "cats");
    }

    #[test]
    fn test_update_enforces_lower_bounds() {
        let next = QueryUpdate::new()
            .page(0)
            .limit(0)
            .apply_to(&QueryState::default());
        assert_eq!(next.page, 1);
        assert_eq!(next.limit, 1);
    }
}
