//! Error context for richer debugging information.

use std::fmt;

/// Where an error happened: the operation, and the item/page involved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed (e.g. "fetch_page", "toggle_like").
    pub operation: String,
    /// Item the operation targeted.
    pub item_id: Option<String>,
    /// Page number in effect when the error happened.
    pub page: Option<u32>,
    /// Fetch trigger value the request belonged to.
    pub trigger: Option<u64>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Default::default()
        }
    }

    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_trigger(mut self, trigger: u64) -> Self {
        self.trigger = Some(trigger);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation={}", self.operation)?;
        if let Some(id) = &self.item_id {
            write!(f, " item={}", id)?;
        }
        if let Some(page) = self.page {
            write!(f, " page={}", page)?;
        }
        if let Some(trigger) = self.trigger {
            write!(f, " trigger={}", trigger)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_display() {
        let ctx = ErrorContext::new("toggle_like")
            .with_item_id("p1")
            .with_page(2)
            .with_trigger(7);
        assert_eq!(ctx.to_string(), "operation=toggle_like item=p1 page=2 trigger=7");
    }

    #[test]
    fn test_display_minimal() {
        assert_eq!(ErrorContext::new("search").to_string(), "operation=search");
    }
}
