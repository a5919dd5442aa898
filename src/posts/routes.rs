//! URL construction for the posts backend.

/// Builds endpoint URLs against a base such as `http://localhost:4000/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base_url: String,
}

impl Routes {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /posts/all?page={p}&limit={l}&public={f}`
    pub fn page(&self, page: u32, limit: u32, public_filter: &str) -> String {
        format!(
            "{}/posts/all?page={}&limit={}&public={}",
            self.base_url,
            page,
            limit,
            urlencoding::encode(public_filter)
        )
    }

    /// `GET /posts/search/{query}`, query percent-encoded as a path segment.
    pub fn search(&self, query: &str) -> String {
        format!("{}/posts/search/{}", self.base_url, urlencoding::encode(query))
    }

    /// `POST /likes/addRemove/{id}`
    pub fn toggle_like(&self, item_id: &str) -> String {
        format!("{}/likes/addRemove/{}", self.base_url, urlencoding::encode(item_id))
    }

    /// `GET` or `DELETE /posts/{id}`
    pub fn post(&self, item_id: &str) -> String {
        format!("{}/posts/{}", self.base_url, urlencoding::encode(item_id))
    }

    /// `POST /posts/add`
    pub fn create(&self) -> String {
        format!("{}/posts/add", self.base_url)
    }

    /// `GET /tags`
    pub fn tags(&self) -> String {
        format!("{}/tags", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_route() {
        let routes = Routes::new("http://localhost:4000/api/");
        assert_eq!(
            routes.page(2, 9, "1"),
            "http://localhost:4000/api/posts/all?page=2&limit=9&public=1"
        );
    }

    #[test]
    fn test_search_route_encodes_query() {
        let routes = Routes::new("http://h/api");
        assert_eq!(routes.search("rust & go"), "http://h/api/posts/search/rust%20%26%20go");
        assert_eq!(routes.search("a/b"), "http://h/api/posts/search/a%2Fb");
    }

    #[test]
    fn test_item_routes() {
        let routes = Routes::new("http://h/api");
        assert_eq!(routes.toggle_like("abc"), "http://h/api/likes/addRemove/abc");
        assert_eq!(routes.post("abc"), "http://h/api/posts/abc");
        assert_eq!(routes.create(), "http://h/api/posts/add");
        assert_eq!(routes.tags(), "http://h/api/tags");
    }
}
