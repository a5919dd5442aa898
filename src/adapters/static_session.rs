//! Fixed session built from configuration.

use crate::models::CurrentUser;
use crate::traits::SessionProvider;

/// A session whose token and user never change for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl StaticSession {
    pub fn new(token: Option<String>, user: Option<CurrentUser>) -> Self {
        Self { token, user }
    }

    /// No credential, no user.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionProvider for StaticSession {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }

    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }
}
