//! Client configuration.
//!
//! Built with `with_*` setters or read from `CHITCHAT_*` environment
//! variables.

use std::time::Duration;

use crate::models::{CurrentUser, UserRole};

/// Backend used in dev mode.
pub const DEV_API_URL: &str = "http://localhost:4000/api";
/// Production backend.
pub const PROD_API_URL: &str = "https://backend.chit-chat-connect.bojanilic.net/api";
/// Default time a single fetch may take before it fails with a timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default `public` filter on the paged fetch.
pub const DEFAULT_PUBLIC_FILTER: &str = "1";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Settings for the posts client and the list view model.
///
/// ```ignore
/// use chitchat::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_api_url("http://localhost:4000/api")
///     .with_token("abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, without trailing slash
    pub api_url: String,
    /// Bearer credential sent with every request
    pub token: Option<String>,
    /// Signed-in user, used for "liked by me" and "can delete"
    pub user: Option<CurrentUser>,
    /// Per-fetch timeout (default: 30s)
    pub timeout: Duration,
    /// Value of the `public` parameter on the paged fetch (default: "1")
    pub public_filter: String,
    pub dev_mode: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: PROD_API_URL.to_string(),
            token: None,
            user: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            public_filter: DEFAULT_PUBLIC_FILTER.to_string(),
            dev_mode: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing slash is dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_public_filter(mut self, filter: impl Into<String>) -> Self {
        self.public_filter = filter.into();
        self
    }

    /// Enable dev mode, pointing at the local backend.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        if dev_mode {
            self.api_url = DEV_API_URL.to_string();
        }
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps variable names to
    /// values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default().with_dev_mode(lookup("CHITCHAT_DEV").is_some());

        if let Some(url) = lookup("CHITCHAT_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url.trim());
        }
        if let Some(token) = lookup("CHITCHAT_TOKEN").filter(|v| !v.is_empty()) {
            config = config.with_token(token);
        }
        if let Some(id) = lookup("CHITCHAT_USER_ID").filter(|v| !v.trim().is_empty()) {
            let role = match lookup("CHITCHAT_USER_ROLE") {
                Some(raw) => raw.parse::<UserRole>().map_err(|_| ConfigError::InvalidValue {
                    name: "CHITCHAT_USER_ROLE".to_string(),
                    value: raw.clone(),
                    expected: "user or admin",
                })?,
                None => UserRole::default(),
            };
            config = config.with_user(CurrentUser::new(id.trim()).with_role(role));
        }
        if let Some(raw) = lookup("CHITCHAT_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "CHITCHAT_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                    expected: "a positive number of seconds",
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup("CHITCHAT_PUBLIC_FILTER") {
            match raw.trim() {
                "0" | "1" => config = config.with_public_filter(raw.trim()),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "CHITCHAT_PUBLIC_FILTER".to_string(),
                        value: raw,
                        expected: "0 or 1",
                    })
                }
            }
        }

        Ok(config)
    }
}
