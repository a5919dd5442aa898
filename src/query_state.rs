//! Mapping between `QueryState` and a URL-style parameter store.
//!
//! The adapter owns no state of its own beyond the store it wraps. `read`
//! never fails: missing, non-numeric or zero values fall back to defaults.

use crate::models::{QueryState, QueryUpdate, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::traits::ParamStore;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const SEARCH_KEY: &str = "search";

/// Reads and writes `page`, `limit` and `search` in a `ParamStore`.
#[derive(Debug)]
pub struct QueryStateAdapter<S: ParamStore> {
    store: S,
}

impl<S: ParamStore> QueryStateAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Current query state. Unusable numbers are treated as absent.
    pub fn read(&self) -> QueryState {
        QueryState {
            page: self.read_positive(PAGE_KEY).unwrap_or(DEFAULT_PAGE),
            limit: self.read_positive(LIMIT_KEY).unwrap_or(DEFAULT_LIMIT),
            search_query: self.store.get(SEARCH_KEY).unwrap_or_default(),
        }
    }

    /// Merge `update` into the stored parameters and return the result.
    ///
    /// Read, merge and replace happen in this one call, so fields the update
    /// leaves out keep their stored values. Keys the adapter does not own
    /// are carried over untouched; an empty search query removes the
    /// `search` key.
    pub fn write(&mut self, update: QueryUpdate) -> QueryState {
        let merged = update.apply_to(&self.read());

        let mut params: Vec<(String, String)> = self
            .store
            .entries()
            .into_iter()
            .filter(|(k, _)| k != PAGE_KEY && k != LIMIT_KEY && k != SEARCH_KEY)
            .collect();
        params.push((PAGE_KEY.to_string(), merged.page.to_string()));
        params.push((LIMIT_KEY.to_string(), merged.limit.to_string()));
        if !merged.search_query.is_empty() {
            params.push((SEARCH_KEY.to_string(), merged.search_query.clone()));
        }

        self.store.replace_all(params);
        tracing::debug!(
            page = merged.page,
            limit = merged.limit,
            search = %merged.search_query,
            "query state written"
        );
        merged
    }

    fn read_positive(&self, key: &str) -> Option<u32> {
        self.store
            .get(key)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n >= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryParamStore;

    fn adapter(query: &str) -> QueryStateAdapter<InMemoryParamStore> {
        QueryStateAdapter::new(InMemoryParamStore::from_query_string(query))
    }

    #[test]
    fn test_read_defaults_when_empty() {
        let state = adapter("").read();
        assert_eq!(state, QueryState::default());
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 9);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn test_read_treats_bad_numbers_as_absent() {
        let state = adapter("page=abc&limit=-3").read();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 9);

        let state = adapter("page=0&limit=0").read();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 9);
    }

    #[test]
    fn test_read_parses_values() {
        let state = adapter("page=4&limit=12&search=cats").read();
        assert_eq!(state.page, 4);
        assert_eq!(state.limit, 12);
        assert_eq!(state.search_query, "cats");
    }

    #[test]
    fn test_page_only_write_preserves_other_fields() {
        let mut adapter = adapter("page=1&limit=12&search=cats");
        adapter.write(QueryUpdate::new().page(3));
        let state = adapter.read();
        assert_eq!(state.page, 3);
        assert_eq!(state.limit, 12);
        assert_eq!(state.search_query, "cats");
    }

    #[test]
    fn test_write_keeps_foreign_keys() {
        let mut adapter = adapter("tab=mine&page=2");
        adapter.write(QueryUpdate::new().limit(6));
        assert_eq!(adapter.store().get("tab").as_deref(), Some("mine"));
        assert_eq!(adapter.read().page, 2);
    }

    #[test]
    fn test_empty_search_removes_key() {
        let mut adapter = adapter("search=cats");
        adapter.write(QueryUpdate::new().search_query(""));
        assert_eq!(adapter.store().get(SEARCH_KEY), None);
        assert_eq!(adapter.read().search_query, "");
    }

    #[test]
    fn test_write_clamps_to_one() {
        let mut adapter = adapter("");
        let state = adapter.write(QueryUpdate::new().page(0).limit(0));
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 1);
    }
}
