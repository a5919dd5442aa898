use super::Post;

/// One fetched slice of the remote collection.
///
/// `total_count` is the size of the whole collection under the current
/// filter, not the length of `items`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<Post>,
    pub total_count: u64,
}

impl Page {
    pub fn new(items: Vec<Post>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Search results are unpaginated: the count is the number of matches.
    pub fn from_search(items: Vec<Post>) -> Self {
        let total_count = items.len() as u64;
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
