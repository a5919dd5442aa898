use bytes::Bytes;
use serde::Serialize;

use super::Tag;

/// An image picked for upload, before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Raw create-post form input. Turned into a `NewPost` by `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPostForm {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub image: Option<ImageUpload>,
}

/// Create payload as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub tags: Vec<Tag>,
    /// Image encoded as a `data:` URL.
    pub image: String,
    pub user_id: String,
}
