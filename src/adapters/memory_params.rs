//! In-memory URL query-string parameter store.

use crate::traits::ParamStore;

/// Ordered key/value parameters backed by a `Vec`, convertible to and from
/// a `a=1&b=2` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryParamStore {
    params: Vec<(String, String)>,
}

impl InMemoryParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string. A leading `?` is ignored, `+` decodes to a
    /// space, and pairs whose key or value fail to decode are skipped.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
                let value = urlencoding::decode(&value.replace('+', " "))
                    .ok()?
                    .into_owned();
                Some((key, value))
            })
            .collect();
        Self { params }
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl ParamStore for InMemoryParamStore {
    fn get(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.params.clone()
    }

    fn replace_all(&mut self, params: Vec<(String, String)>) {
        self.params = params;
    }
}
