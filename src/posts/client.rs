//! HTTP implementation of the posts collection.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::routes::Routes;
use super::wire::{error_message, Envelope, PageData};
use crate::adapters::StaticSession;
use crate::config::{ClientConfig, DEFAULT_PUBLIC_FILTER};
use crate::error::{AuthError, ChitChatError, ChitChatResult, NetworkError};
use crate::models::{NewPost, Page, Post, Tag};
use crate::traits::{Headers, HttpClient, PostsApi, Response, SessionProvider};

/// Whether a non-success status on this call may be an authorization
/// failure the user has to log in to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Read,
    Write,
}

/// Posts collection over any `HttpClient`.
///
/// Stateless apart from configuration: every call builds its request,
/// attaches `Authorization: Bearer <token>` when the session has one, and
/// classifies the response.
pub struct PostsClient<H: HttpClient> {
    http: H,
    routes: Routes,
    public_filter: String,
    session: Arc<dyn SessionProvider>,
}

impl<H: HttpClient> PostsClient<H> {
    pub fn new(http: H, base_url: impl Into<String>) -> Self {
        Self {
            http,
            routes: Routes::new(base_url),
            public_filter: DEFAULT_PUBLIC_FILTER.to_string(),
            session: Arc::new(StaticSession::anonymous()),
        }
    }

    /// Build from configuration, using its token and user as the session.
    pub fn from_config(http: H, config: &ClientConfig) -> Self {
        let session = StaticSession::new(config.token.clone(), config.user.clone());
        Self::new(http, config.api_url.clone())
            .with_public_filter(config.public_filter.clone())
            .with_session(Arc::new(session))
    }

    pub fn with_session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = session;
        self
    }

    pub fn with_public_filter(mut self, filter: impl Into<String>) -> Self {
        self.public_filter = filter.into();
        self
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn session(&self) -> &Arc<dyn SessionProvider> {
        &self.session
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(token) = self.session.bearer_token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Turn a non-success response into the matching error.
    fn classify(response: &Response, kind: CallKind) -> ChitChatError {
        let message = error_message(&response.body, response.status);
        if kind == CallKind::Write {
            if let Some(auth) = AuthError::from_status(response.status, message.clone()) {
                return auth.into();
            }
        }
        ChitChatError::server(response.status, message)
    }

    fn check(response: Response, url: &str, kind: CallKind) -> ChitChatResult<Response> {
        if response.is_success() {
            Ok(response)
        } else {
            let err = Self::classify(&response, kind);
            tracing::warn!(url = %url, status = response.status, error = %err, "request rejected");
            Err(err)
        }
    }

    fn decode<T: DeserializeOwned>(response: &Response) -> ChitChatResult<T> {
        response.json::<Envelope<T>>().map(|e| e.data).map_err(|e| {
            NetworkError::InvalidResponse {
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn get(&self, url: &str) -> ChitChatResult<Response> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .http
            .get(url, &self.headers())
            .await
            .map_err(|e| NetworkError::from_http(e, url))?;
        Self::check(response, url, CallKind::Read)
    }

    async fn post(&self, url: &str, body: &str) -> ChitChatResult<Response> {
        tracing::debug!(url = %url, "POST");
        let response = self
            .http
            .post(url, body, &self.headers())
            .await
            .map_err(|e| NetworkError::from_http(e, url))?;
        Self::check(response, url, CallKind::Write)
    }

    async fn delete(&self, url: &str) -> ChitChatResult<Response> {
        tracing::debug!(url = %url, "DELETE");
        let response = self
            .http
            .delete(url, &self.headers())
            .await
            .map_err(|e| NetworkError::from_http(e, url))?;
        Self::check(response, url, CallKind::Write)
    }
}

#[async_trait]
impl<H: HttpClient> PostsApi for PostsClient<H> {
    async fn fetch_page(&self, page: u32, limit: u32) -> ChitChatResult<Page> {
        let url = self
            .routes
            .page(page.max(1), limit.max(1), &self.public_filter);
        let response = self.get(&url).await?;
        let data: PageData = Self::decode(&response)?;
        Ok(Page::new(data.posts, data.count))
    }

    async fn search(&self, query: &str) -> ChitChatResult<Page> {
        let url = self.routes.search(query);
        let response = self.get(&url).await?;
        let posts: Vec<Post> = Self::decode(&response)?;
        Ok(Page::from_search(posts))
    }

    async fn toggle_like(&self, item_id: &str) -> ChitChatResult<()> {
        let url = self.routes.toggle_like(item_id);
        self.post(&url, "{}").await?;
        tracing::info!(item = %item_id, "like toggled");
        Ok(())
    }

    async fn delete_item(&self, item_id: &str) -> ChitChatResult<()> {
        let url = self.routes.post(item_id);
        self.delete(&url).await?;
        tracing::info!(item = %item_id, "post deleted");
        Ok(())
    }

    async fn create_item(&self, payload: &NewPost) -> ChitChatResult<Post> {
        let url = self.routes.create();
        let body = serde_json::to_string(payload)?;
        let response = self.post(&url, &body).await?;
        let post: Post = Self::decode(&response)?;
        tracing::info!(item = %post.id, "post created");
        Ok(post)
    }

    async fn fetch_post(&self, item_id: &str) -> ChitChatResult<Post> {
        let url = self.routes.post(item_id);
        let response = self.get(&url).await?;
        Self::decode(&response)
    }

    async fn fetch_tags(&self) -> ChitChatResult<Vec<Tag>> {
        let url = self.routes.tags();
        let response = self.get(&url).await?;
        Self::decode(&response)
    }
}
