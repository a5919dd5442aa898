//! Result type alias for ChitChat operations.

use super::chitchat_error::ChitChatError;
use super::context::ErrorContext;

/// Type alias for Results using ChitChatError.
pub type ChitChatResult<T> = Result<T, ChitChatError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> ChitChatResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> ChitChatResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for ChitChatResult<T> {
    fn context(self, ctx: ErrorContext) -> ChitChatResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> ChitChatResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_context_on_err() {
        let result: ChitChatResult<()> = Err(NetworkError::Other {
            message: "reset".to_string(),
        }
        .into());
        let err = result.context(ErrorContext::new("search")).unwrap_err();
        assert_eq!(err.context().unwrap().operation, "search");
    }

    #[test]
    fn test_with_context_is_lazy_on_ok() {
        let result: ChitChatResult<u32> = Ok(3);
        let value = result
            .with_context(|| panic!("context closure must not run on Ok"))
            .unwrap();
        assert_eq!(value, 3);
    }
}
