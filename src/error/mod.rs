//! Unified error handling for the ChitChat client.
//!
//! - **Error Categories**: classification that drives UI reaction
//! - **Domain-specific Errors**: network, auth and validation failures
//! - **Unified Error Type**: `ChitChatError` wraps them all
//! - **Error Context**: operation/item/page attached for logs
//!
//! | Category | Raised when | Retryable |
//! |----------|-------------|-----------|
//! | Network | no response, timeout | By user action |
//! | Server | 4xx/5xx on reads, non-auth statuses on writes | By user action |
//! | Auth | 401/403 on like/delete/create | No, redirect to login |
//! | User | create form failed validation | No |
//! | Client | response body not understood | No |
//! | Configuration | bad environment values | No |

mod auth;
mod category;
mod chitchat_error;
mod context;
mod network;
mod result;
mod validation;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use chitchat_error::{ChitChatError, ErrorKind};
pub use context::ErrorContext;
pub use network::NetworkError;
pub use result::{ChitChatResult, ResultExt};
pub use validation::{FieldError, FormField, ValidationError};
